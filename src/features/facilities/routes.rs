use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::facilities::handlers::facility_handler;
use crate::features::facilities::services::FacilityService;

/// Create routes for the nearby facility search
pub fn routes(service: Arc<FacilityService>) -> Router {
    Router::new()
        .route("/api/nearby", get(facility_handler::nearby_facilities))
        .with_state(service)
}
