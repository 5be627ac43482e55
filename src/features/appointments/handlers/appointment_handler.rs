use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::appointments::dtos::{AppointmentResponseDto, CreateAppointmentDto};
use crate::features::appointments::services::AppointmentService;
use crate::shared::types::ApiResponse;

/// Book an appointment
///
/// `name`, `phone`, `date` and `reason` are required; the first one missing is
/// named in the error. `facility_name` defaults to "N/A".
#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Appointment created successfully", body = ApiResponse<AppointmentResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Database error")
    ),
    tag = "appointments"
)]
pub async fn create_appointment(
    State(service): State<Arc<AppointmentService>>,
    AppJson(dto): AppJson<CreateAppointmentDto>,
) -> Result<(StatusCode, Json<ApiResponse<AppointmentResponseDto>>)> {
    let new = dto.into_new()?;

    let appointment = service.create(new).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(appointment),
            Some("Appointment created successfully".to_string()),
            None,
        )),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::appointments::routes;
    use crate::shared::test_helpers::test_pool;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn setup() -> (TestServer, Arc<AppointmentService>) {
        let service = Arc::new(AppointmentService::new(test_pool().await));
        let server = TestServer::new(routes::routes(Arc::clone(&service))).unwrap();
        (server, service)
    }

    #[tokio::test]
    async fn test_create_returns_created_record() {
        let (server, _) = setup().await;

        let response = server
            .post("/api/appointments")
            .json(&json!({
                "name": "Jane Doe",
                "phone": "+1 555 0100",
                "date": "tomorrow morning",
                "reason": "Sore throat",
                "facility_name": "Downtown Medical Clinic"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Jane Doe");
        assert_eq!(body["data"]["date"], "tomorrow morning");
        assert_eq!(body["data"]["facility_name"], "Downtown Medical Clinic");
        assert!(body["data"]["id"].as_i64().is_some());
        assert!(body["data"]["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_missing_reason_is_rejected_and_not_persisted() {
        let (server, service) = setup().await;

        let response = server
            .post("/api/appointments")
            .json(&json!({
                "name": "Jane Doe",
                "phone": "+1 555 0100",
                "date": "tomorrow"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "reason is required");
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_hides_detail() {
        let pool = test_pool().await;
        sqlx::query("DROP TABLE appointments")
            .execute(&pool)
            .await
            .unwrap();
        let service = Arc::new(AppointmentService::new(pool));
        let server = TestServer::new(routes::routes(service)).unwrap();

        let response = server
            .post("/api/appointments")
            .json(&json!({
                "name": "Jane Doe",
                "phone": "+1 555 0100",
                "date": "tomorrow",
                "reason": "Checkup"
            }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Database error occurred");
        assert!(!response.text().contains("no such table"));
    }

    #[tokio::test]
    async fn test_empty_body_is_rejected() {
        let (server, _) = setup().await;

        let response = server.post("/api/appointments").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "No data provided");
    }
}
