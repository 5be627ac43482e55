use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::emergencies::dtos::{CreateEmergencyAlertDto, EmergencyAlertResponseDto};
use crate::features::emergencies::services::EmergencyService;
use crate::shared::types::ApiResponse;

/// Raise an emergency alert
#[utoipa::path(
    post,
    path = "/api/emergency",
    request_body = CreateEmergencyAlertDto,
    responses(
        (status = 201, description = "Emergency alert sent successfully", body = ApiResponse<EmergencyAlertResponseDto>),
        (status = 400, description = "Location data missing"),
        (status = 500, description = "Database error")
    ),
    tag = "emergencies"
)]
pub async fn create_emergency_alert(
    State(service): State<Arc<EmergencyService>>,
    AppJson(dto): AppJson<CreateEmergencyAlertDto>,
) -> Result<(StatusCode, Json<ApiResponse<EmergencyAlertResponseDto>>)> {
    let new = dto.into_new()?;

    let alert = service.create(new).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(alert),
            Some("Emergency alert sent successfully".to_string()),
            None,
        )),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::emergencies::routes;
    use crate::shared::test_helpers::test_pool;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn server() -> TestServer {
        let service = Arc::new(EmergencyService::new(test_pool().await));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_create_applies_default_message() {
        let server = server().await;

        let response = server
            .post("/api/emergency")
            .json(&json!({ "latitude": 51.5, "longitude": -0.12 }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["message"], "Emergency alert triggered");
        assert_eq!(body["data"]["user_info"], "");
        assert_eq!(body["message"], "Emergency alert sent successfully");
    }

    #[tokio::test]
    async fn test_missing_latitude_is_rejected() {
        let server = server().await;

        let response = server
            .post("/api/emergency")
            .json(&json!({ "longitude": -0.12, "message": "help" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "latitude is required");
    }

    #[tokio::test]
    async fn test_non_numeric_latitude_is_rejected() {
        let server = server().await;

        let response = server
            .post("/api/emergency")
            .json(&json!({ "latitude": "north", "longitude": -0.12 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }
}
