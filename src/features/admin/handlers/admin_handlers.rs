use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::admin::services::AdminService;
use crate::features::appointments::dtos::AppointmentResponseDto;
use crate::features::emergencies::dtos::EmergencyAlertResponseDto;
use crate::shared::types::ApiResponse;

/// List all appointments
#[utoipa::path(
    get,
    path = "/api/admin/appointments",
    responses(
        (status = 200, description = "Appointments, newest first", body = ApiResponse<Vec<AppointmentResponseDto>>),
        (status = 500, description = "Database error")
    ),
    tag = "admin"
)]
pub async fn list_appointments(
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<Vec<AppointmentResponseDto>>>> {
    let items = service.list_appointments().await?;
    Ok(Json(ApiResponse::list(items)))
}

/// List all emergency alerts
#[utoipa::path(
    get,
    path = "/api/admin/emergencies",
    responses(
        (status = 200, description = "Emergency alerts, newest first", body = ApiResponse<Vec<EmergencyAlertResponseDto>>),
        (status = 500, description = "Database error")
    ),
    tag = "admin"
)]
pub async fn list_emergencies(
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<Vec<EmergencyAlertResponseDto>>>> {
    let items = service.list_emergencies().await?;
    Ok(Json(ApiResponse::list(items)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::admin::routes;
    use crate::features::appointments::models::NewAppointment;
    use crate::features::appointments::AppointmentService;
    use crate::features::emergencies::models::NewEmergencyAlert;
    use crate::features::emergencies::EmergencyService;
    use crate::shared::test_helpers::test_pool;
    use axum::Router;
    use axum_test::TestServer;
    use serde_json::Value;

    struct Setup {
        server: TestServer,
        appointments: Arc<AppointmentService>,
        emergencies: Arc<EmergencyService>,
    }

    async fn setup() -> Setup {
        let pool = test_pool().await;
        let appointments = Arc::new(AppointmentService::new(pool.clone()));
        let emergencies = Arc::new(EmergencyService::new(pool));
        let admin = Arc::new(AdminService::new(
            Arc::clone(&appointments),
            Arc::clone(&emergencies),
        ));
        let app = Router::new().nest("/api/admin", routes::routes(admin));

        Setup {
            server: TestServer::new(app).unwrap(),
            appointments,
            emergencies,
        }
    }

    fn appointment(name: &str) -> NewAppointment {
        NewAppointment {
            name: name.to_string(),
            phone: "555-0100".to_string(),
            date: "2025-03-01".to_string(),
            reason: "Checkup".to_string(),
            facility_name: "N/A".to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_listings() {
        let setup = setup().await;

        for path in ["/api/admin/appointments", "/api/admin/emergencies"] {
            let response = setup.server.get(path).await;
            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body["success"], true);
            assert_eq!(body["meta"]["total"], 0, "{}", path);
            assert_eq!(body["data"], Value::Array(vec![]));
        }
    }

    #[tokio::test]
    async fn test_appointments_newest_first() {
        let setup = setup().await;
        setup.appointments.create(appointment("First")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        setup.appointments.create(appointment("Second")).await.unwrap();

        let body: Value = setup.server.get("/api/admin/appointments").await.json();

        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"][0]["name"], "Second");
        assert_eq!(body["data"][1]["name"], "First");
    }

    #[tokio::test]
    async fn test_emergencies_listed_with_defaults() {
        let setup = setup().await;
        setup
            .emergencies
            .create(NewEmergencyAlert {
                latitude: 40.7,
                longitude: -74.0,
                message: "Emergency alert triggered".to_string(),
                user_info: String::new(),
            })
            .await
            .unwrap();

        let body: Value = setup.server.get("/api/admin/emergencies").await.json();

        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["latitude"], 40.7);
        assert_eq!(body["data"][0]["message"], "Emergency alert triggered");
        assert_eq!(body["data"][0]["user_info"], "");
    }
}
