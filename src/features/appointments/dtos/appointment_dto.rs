use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::Result;
use crate::features::appointments::models::NewAppointment;
use crate::shared::constants::DEFAULT_FACILITY_NAME;
use crate::shared::validation::{require_text, validation_message};

/// Request DTO for booking an appointment.
///
/// Every field is optional at the serde level so that a missing field is
/// reported by name instead of as a generic JSON error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAppointmentDto {
    #[validate(length(max = 100, message = "name must not exceed 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 20, message = "phone must not exceed 20 characters"))]
    pub phone: Option<String>,

    /// Free-form date text, stored as given
    #[validate(length(max = 50, message = "date must not exceed 50 characters"))]
    pub date: Option<String>,

    #[validate(length(max = 200, message = "reason must not exceed 200 characters"))]
    pub reason: Option<String>,

    /// Facility the appointment is for (defaults to "N/A")
    #[validate(length(max = 200, message = "facility_name must not exceed 200 characters"))]
    pub facility_name: Option<String>,
}

impl CreateAppointmentDto {
    /// Check length limits, then required fields in order (name, phone, date, reason)
    pub fn into_new(self) -> Result<NewAppointment> {
        self.validate().map_err(validation_message)?;

        let name = require_text(self.name, "name")?;
        let phone = require_text(self.phone, "phone")?;
        let date = require_text(self.date, "date")?;
        let reason = require_text(self.reason, "reason")?;
        let facility_name = self
            .facility_name
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FACILITY_NAME.to_string());

        Ok(NewAppointment {
            name,
            phone,
            date,
            reason,
            facility_name,
        })
    }
}

/// Response DTO for appointment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppointmentResponseDto {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub date: String,
    pub reason: String,
    pub facility_name: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;

    fn full_dto() -> CreateAppointmentDto {
        CreateAppointmentDto {
            name: Some("Jane Doe".to_string()),
            phone: Some("+1 555 0100".to_string()),
            date: Some("next tuesday".to_string()),
            reason: Some("Checkup".to_string()),
            facility_name: None,
        }
    }

    #[test]
    fn test_facility_name_defaults() {
        let new = full_dto().into_new().unwrap();
        assert_eq!(new.facility_name, "N/A");
        assert_eq!(new.date, "next tuesday");
    }

    #[test]
    fn test_first_missing_field_is_named() {
        let dto = CreateAppointmentDto {
            phone: None,
            reason: None,
            ..full_dto()
        };
        match dto.into_new() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "phone is required"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_reason_is_named() {
        let dto = CreateAppointmentDto {
            reason: None,
            ..full_dto()
        };
        match dto.into_new() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "reason is required"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_overlong_phone_is_rejected() {
        let dto = CreateAppointmentDto {
            phone: Some("1".repeat(21)),
            ..full_dto()
        };
        assert!(matches!(dto.into_new(), Err(AppError::Validation(_))));
    }
}
