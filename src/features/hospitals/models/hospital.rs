use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::hospitals::dtos::{curated_id, HospitalResponseDto};

/// Database model for a curated facility
#[derive(Debug, Clone, FromRow)]
pub struct Hospital {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "type")]
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

#[derive(Debug, Clone, PartialEq)]
pub struct NewHospital {
    pub name: String,
    pub facility_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
    pub website: String,
    pub description: String,
    pub is_featured: bool,
}

impl From<Hospital> for HospitalResponseDto {
    fn from(h: Hospital) -> Self {
        Self {
            id: curated_id(h.id),
            db_id: h.id,
            name: h.name,
            facility_type: h.facility_type,
            latitude: h.latitude,
            longitude: h.longitude,
            address: h.address,
            phone: h.phone,
            opening_hours: h.opening_hours,
            website: h.website,
            description: h.description,
            is_featured: h.is_featured,
            created_at: h.created_at,
        }
    }
}
