use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::appointments::handlers::appointment_handler;
use crate::features::appointments::services::AppointmentService;

/// Create routes for the appointments feature
pub fn routes(service: Arc<AppointmentService>) -> Router {
    Router::new()
        .route(
            "/api/appointments",
            post(appointment_handler::create_appointment),
        )
        .with_state(service)
}
