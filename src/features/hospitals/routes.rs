use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::hospitals::handlers::hospital_handler;
use crate::features::hospitals::services::HospitalService;

/// Create routes for the curated facility feature
pub fn routes(service: Arc<HospitalService>) -> Router {
    Router::new()
        .route(
            "/api/hospitals",
            get(hospital_handler::list_hospitals).post(hospital_handler::create_hospital),
        )
        .route(
            "/api/hospitals/{id}",
            get(hospital_handler::get_hospital)
                .put(hospital_handler::update_hospital)
                .delete(hospital_handler::delete_hospital),
        )
        .with_state(service)
}
