use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::hospitals::models::NewHospital;
use crate::shared::constants::CURATED_ID_PREFIX;
use crate::shared::validation::{reject_blank, require, require_text, validation_message};

/// Request DTO for creating a curated facility
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateHospitalDto {
    #[validate(length(max = 200, message = "name must not exceed 200 characters"))]
    pub name: Option<String>,

    /// hospital, clinic, pharmacy, doctors, dentist, ... (not enforced)
    #[serde(rename = "type")]
    #[validate(length(max = 50, message = "type must not exceed 50 characters"))]
    pub facility_type: Option<String>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    #[validate(length(max = 300))]
    pub address: Option<String>,

    #[validate(length(max = 50))]
    pub phone: Option<String>,

    #[validate(length(max = 200))]
    pub opening_hours: Option<String>,

    #[validate(length(max = 300))]
    pub website: Option<String>,

    pub description: Option<String>,

    pub is_featured: Option<bool>,
}

impl CreateHospitalDto {
    /// Required: name, type, latitude, longitude (checked in that order)
    pub fn into_new(self) -> Result<NewHospital> {
        self.validate().map_err(validation_message)?;

        Ok(NewHospital {
            name: require_text(self.name, "name")?,
            facility_type: require_text(self.facility_type, "type")?,
            latitude: require(self.latitude, "latitude")?,
            longitude: require(self.longitude, "longitude")?,
            address: self.address.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            opening_hours: self.opening_hours.unwrap_or_default(),
            website: self.website.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            is_featured: self.is_featured.unwrap_or(false),
        })
    }
}

/// Partial update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateHospitalDto {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50, message = "type must be 1-50 characters"))]
    pub facility_type: Option<String>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    #[validate(length(max = 300))]
    pub address: Option<String>,

    #[validate(length(max = 50))]
    pub phone: Option<String>,

    #[validate(length(max = 200))]
    pub opening_hours: Option<String>,

    #[validate(length(max = 300))]
    pub website: Option<String>,

    pub description: Option<String>,

    pub is_featured: Option<bool>,
}

impl UpdateHospitalDto {
    /// Length limits, then name and type must not be blanked out
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(validation_message)?;
        reject_blank(self.name.as_deref(), "name")?;
        reject_blank(self.facility_type.as_deref(), "type")
    }
}

/// Response DTO for a curated facility
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HospitalResponseDto {
    /// Namespaced id, e.g. `hospital_12`
    pub id: String,
    /// Numeric storage id
    pub db_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
    pub website: String,
    pub description: String,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

pub fn curated_id(id: i64) -> String {
    format!("{}{}", CURATED_ID_PREFIX, id)
}

/// Accept `12` or `hospital_12`
pub fn parse_hospital_id(raw: &str) -> Result<i64> {
    let digits = raw.strip_prefix(CURATED_ID_PREFIX).unwrap_or(raw);
    digits
        .parse::<i64>()
        .map_err(|_| AppError::Validation(format!("Invalid hospital id: {}", raw)))
}
