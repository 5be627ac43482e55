use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponseDto {
    pub status: String,
    pub message: String,
    pub version: String,
}

/// Report that the service is up
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponseDto)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponseDto> {
    Json(HealthResponseDto {
        status: "healthy".to_string(),
        message: "Nearby Hospital Facility Finder API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::features::health::routes;
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_health_payload() {
        let server = TestServer::new(routes::routes()).unwrap();

        let response = server.get("/api/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["message"].as_str().unwrap().contains("running"));
    }
}
