use utoipa::{Modify, OpenApi};

use crate::features::admin::handlers as admin_handlers;
use crate::features::appointments::{
    dtos as appointments_dtos, handlers::appointment_handler,
};
use crate::features::emergencies::{dtos as emergencies_dtos, handlers::emergency_handler};
use crate::features::facilities::{dtos as facilities_dtos, handlers::facility_handler};
use crate::features::health::handlers as health_handlers;
use crate::features::hospitals::{dtos as hospitals_dtos, handlers::hospital_handler};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Nearby search
        facility_handler::nearby_facilities,
        // Appointments
        appointment_handler::create_appointment,
        // Emergencies
        emergency_handler::create_emergency_alert,
        // Curated hospitals
        hospital_handler::list_hospitals,
        hospital_handler::create_hospital,
        hospital_handler::get_hospital,
        hospital_handler::update_hospital,
        hospital_handler::delete_hospital,
        // Admin
        admin_handlers::list_appointments,
        admin_handlers::list_emergencies,
        // Health
        health_handlers::health_check,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Facilities
            facilities_dtos::FacilityDto,
            facilities_dtos::FacilityId,
            facilities_dtos::FacilitySource,
            ApiResponse<Vec<facilities_dtos::FacilityDto>>,
            // Appointments
            appointments_dtos::CreateAppointmentDto,
            appointments_dtos::AppointmentResponseDto,
            ApiResponse<appointments_dtos::AppointmentResponseDto>,
            ApiResponse<Vec<appointments_dtos::AppointmentResponseDto>>,
            // Emergencies
            emergencies_dtos::CreateEmergencyAlertDto,
            emergencies_dtos::EmergencyAlertResponseDto,
            ApiResponse<emergencies_dtos::EmergencyAlertResponseDto>,
            ApiResponse<Vec<emergencies_dtos::EmergencyAlertResponseDto>>,
            // Hospitals
            hospitals_dtos::CreateHospitalDto,
            hospitals_dtos::UpdateHospitalDto,
            hospitals_dtos::HospitalResponseDto,
            ApiResponse<hospitals_dtos::HospitalResponseDto>,
            ApiResponse<Vec<hospitals_dtos::HospitalResponseDto>>,
            // Health
            health_handlers::HealthResponseDto,
        )
    ),
    tags(
        (name = "facilities", description = "Nearby medical facility search (OpenStreetMap + curated)"),
        (name = "appointments", description = "Appointment booking"),
        (name = "emergencies", description = "Emergency alerts"),
        (name = "hospitals", description = "Curated facility management"),
        (name = "admin", description = "Read-only listings for staff"),
        (name = "health", description = "Liveness probe"),
    ),
    info(
        title = "Facility Finder API",
        version = "0.1.0",
        description = "API documentation for the nearby hospital facility finder",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
