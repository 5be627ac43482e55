use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::config::SearchConfig;
use crate::core::error::{AppError, Result};

/// Raw query parameters for `/api/nearby`.
///
/// Kept as strings so that a missing or non-numeric value becomes a
/// validation error naming the parameter.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct NearbyQueryParams {
    /// Latitude of the search center
    pub lat: Option<String>,
    /// Longitude of the search center
    pub lon: Option<String>,
    /// Search radius in meters (default and maximum come from configuration)
    pub radius: Option<String>,
}

/// Validated search circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    pub lat: f64,
    pub lon: f64,
    /// Meters
    pub radius: u32,
}

impl NearbyQueryParams {
    /// Parse and validate; the radius falls back to the configured default
    /// and is clamped to the configured maximum.
    pub fn into_area(self, search: &SearchConfig) -> Result<SearchArea> {
        let lat = parse_coordinate(self.lat, "lat")?;
        let lon = parse_coordinate(self.lon, "lon")?;

        let radius = match self.radius.as_deref().map(str::trim) {
            None | Some("") => search.default_radius,
            Some(raw) => match raw.parse::<u32>() {
                Ok(r) if r > 0 => r,
                _ => {
                    return Err(AppError::Validation(
                        "radius must be a positive integer".to_string(),
                    ))
                }
            },
        };

        if radius > search.max_radius {
            tracing::debug!(
                "Clamping search radius {} to maximum {}",
                radius,
                search.max_radius
            );
        }

        Ok(SearchArea {
            lat,
            lon,
            radius: radius.min(search.max_radius),
        })
    }
}

fn parse_coordinate(raw: Option<String>, field: &str) -> Result<f64> {
    let raw = raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation(format!("{} is required", field)))?;

    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::Validation(format!("{} must be a number", field)))
}

/// Facility identifier: OpenStreetMap ids are numeric, curated ids are
/// prefixed strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FacilityId {
    Osm(i64),
    Curated(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FacilitySource {
    OpenStreetMap,
    Curated,
}

/// One facility in a nearby search result; built per response, never stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FacilityDto {
    pub id: FacilityId,
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
    pub website: String,
    pub source: FacilitySource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}
