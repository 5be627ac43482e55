use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::admin::handlers;
use crate::features::admin::services::AdminService;

/// Create admin routes, to be nested under `/api/admin`
pub fn routes(admin_service: Arc<AdminService>) -> Router {
    Router::new()
        .route("/appointments", get(handlers::list_appointments))
        .route("/emergencies", get(handlers::list_emergencies))
        .with_state(admin_service)
}
