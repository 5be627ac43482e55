use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::Result;
use crate::features::emergencies::models::NewEmergencyAlert;
use crate::shared::constants::DEFAULT_ALERT_MESSAGE;
use crate::shared::validation::{require, validation_message};

/// Request DTO for raising an emergency alert
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEmergencyAlertDto {
    /// Any numeric value is accepted; no range check is applied
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    #[validate(length(max = 500, message = "message must not exceed 500 characters"))]
    pub message: Option<String>,

    #[validate(length(max = 200, message = "user_info must not exceed 200 characters"))]
    pub user_info: Option<String>,
}

impl CreateEmergencyAlertDto {
    pub fn into_new(self) -> Result<NewEmergencyAlert> {
        self.validate().map_err(validation_message)?;

        let latitude = require(self.latitude, "latitude")?;
        let longitude = require(self.longitude, "longitude")?;

        Ok(NewEmergencyAlert {
            latitude,
            longitude,
            message: self
                .message
                .unwrap_or_else(|| DEFAULT_ALERT_MESSAGE.to_string()),
            user_info: self.user_info.unwrap_or_default(),
        })
    }
}

/// Response DTO for emergency alert
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmergencyAlertResponseDto {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub message: String,
    pub user_info: String,
    pub created_at: DateTime<Utc>,
}
