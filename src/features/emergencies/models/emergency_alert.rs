use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::emergencies::dtos::EmergencyAlertResponseDto;

/// Database model for emergency alert
#[derive(Debug, Clone, FromRow)]
pub struct EmergencyAlert {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub message: String,
    pub user_info: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmergencyAlert {
    pub latitude: f64,
    pub longitude: f64,
    pub message: String,
    pub user_info: String,
}

impl From<EmergencyAlert> for EmergencyAlertResponseDto {
    fn from(a: EmergencyAlert) -> Self {
        Self {
            id: a.id,
            latitude: a.latitude,
            longitude: a.longitude,
            message: a.message,
            user_info: a.user_info,
            created_at: a.created_at,
        }
    }
}
