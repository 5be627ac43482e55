use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::appointments::dtos::AppointmentResponseDto;

/// Database model for appointment
#[derive(Debug, Clone, FromRow)]
pub struct Appointment {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub date: String,
    pub reason: String,
    pub facility_name: String,
    pub created_at: DateTime<Utc>,
}

/// Validated appointment ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub reason: String,
    pub facility_name: String,
}

impl From<Appointment> for AppointmentResponseDto {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            name: a.name,
            phone: a.phone,
            date: a.date,
            reason: a.reason,
            facility_name: a.facility_name,
            created_at: a.created_at,
        }
    }
}
