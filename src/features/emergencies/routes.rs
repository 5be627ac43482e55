use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::emergencies::handlers::emergency_handler;
use crate::features::emergencies::services::EmergencyService;

/// Create routes for the emergency alert feature
pub fn routes(service: Arc<EmergencyService>) -> Router {
    Router::new()
        .route(
            "/api/emergency",
            post(emergency_handler::create_emergency_alert),
        )
        .with_state(service)
}
