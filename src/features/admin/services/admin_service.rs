use std::sync::Arc;

use crate::core::error::Result;
use crate::features::appointments::dtos::AppointmentResponseDto;
use crate::features::appointments::AppointmentService;
use crate::features::emergencies::dtos::EmergencyAlertResponseDto;
use crate::features::emergencies::EmergencyService;

/// Service for admin queries
pub struct AdminService {
    appointments: Arc<AppointmentService>,
    emergencies: Arc<EmergencyService>,
}

impl AdminService {
    pub fn new(appointments: Arc<AppointmentService>, emergencies: Arc<EmergencyService>) -> Self {
        Self {
            appointments,
            emergencies,
        }
    }

    pub async fn list_appointments(&self) -> Result<Vec<AppointmentResponseDto>> {
        let items = self.appointments.list().await?;
        tracing::debug!("Admin listed {} appointments", items.len());
        Ok(items)
    }

    pub async fn list_emergencies(&self) -> Result<Vec<EmergencyAlertResponseDto>> {
        let items = self.emergencies.list().await?;
        tracing::debug!("Admin listed {} emergency alerts", items.len());
        Ok(items)
    }
}
