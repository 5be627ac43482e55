use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::core::config::OverpassConfig;
use crate::core::error::{AppError, Result};
use crate::features::facilities::dtos::SearchArea;

/// `amenity=*` values treated as medical facilities
const AMENITY_VALUES: [&str; 5] = ["hospital", "clinic", "pharmacy", "doctors", "dentist"];

/// `healthcare=*` values treated as medical facilities
const HEALTHCARE_VALUES: [&str; 5] = ["hospital", "clinic", "doctor", "dentist", "pharmacy"];

/// Overpass API response envelope
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// One raw OpenStreetMap element as returned with `out center`
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub element_type: String,
    pub id: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<OverpassCenter>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OverpassCenter {
    pub lat: f64,
    pub lon: f64,
}

/// Source of raw facility elements around a point
#[async_trait]
pub trait FacilityLookup: Send + Sync {
    async fn fetch_elements(&self, area: &SearchArea) -> Result<Vec<OverpassElement>>;
}

/// Build the Overpass QL query selecting medical nodes and ways around a point.
///
/// `out center` makes ways carry a center point.
pub fn build_query(area: &SearchArea, timeout: Duration) -> String {
    let around = format!("(around:{},{},{})", area.radius, area.lat, area.lon);
    let amenity = format!("[\"amenity\"~\"^({})$\"]", AMENITY_VALUES.join("|"));
    let healthcare = format!("[\"healthcare\"~\"^({})$\"]", HEALTHCARE_VALUES.join("|"));

    let mut statements = String::new();
    for element in ["node", "way"] {
        for filter in [&amenity, &healthcare] {
            statements.push_str(&format!("  {}{}{};\n", element, filter, around));
        }
    }

    format!(
        "[out:json][timeout:{}];\n(\n{});\nout center;",
        timeout.as_secs(),
        statements
    )
}

/// Client for the public Overpass interpreter
pub struct OverpassClient {
    client: reqwest::Client,
    api_url: String,
    timeout: Duration,
}

impl OverpassClient {
    pub fn new(config: &OverpassConfig) -> std::result::Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            timeout: config.timeout,
        })
    }

    fn map_request_error(e: reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::UpstreamTimeout(format!("Overpass request timed out: {}", e))
        } else {
            AppError::ExternalServiceError(format!("Overpass request failed: {}", e))
        }
    }
}

#[async_trait]
impl FacilityLookup for OverpassClient {
    async fn fetch_elements(&self, area: &SearchArea) -> Result<Vec<OverpassElement>> {
        let query = build_query(area, self.timeout);
        tracing::debug!(
            "Querying Overpass: lat={}, lon={}, radius={}",
            area.lat,
            area.lon,
            area.radius
        );

        let response = self
            .client
            .post(&self.api_url)
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(Self::map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Overpass returned status {}",
                status
            )));
        }

        let body: OverpassResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                Self::map_request_error(e)
            } else {
                AppError::ExternalServiceError(format!("Failed to parse Overpass response: {}", e))
            }
        })?;

        tracing::debug!("Overpass returned {} elements", body.elements.len());

        Ok(body.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Form, http::StatusCode, routing::post, Json, Router};
    use serde_json::json;

    fn area() -> SearchArea {
        SearchArea {
            lat: 40.7589,
            lon: -73.9851,
            radius: 3000,
        }
    }

    /// Serve `router` on an ephemeral port and return its interpreter URL
    async fn spawn_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/interpreter", addr)
    }

    fn client_for(api_url: String, timeout: Duration) -> OverpassClient {
        OverpassClient::new(&OverpassConfig {
            api_url,
            timeout,
            user_agent: "facility-finder-tests".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_query_covers_both_schemes_for_nodes_and_ways() {
        let query = build_query(&area(), Duration::from_secs(30));

        assert!(query.starts_with("[out:json][timeout:30];"));
        assert!(query.ends_with("out center;"));
        assert!(query.contains(
            "node[\"amenity\"~\"^(hospital|clinic|pharmacy|doctors|dentist)$\"](around:3000,40.7589,-73.9851);"
        ));
        assert!(query.contains(
            "way[\"healthcare\"~\"^(hospital|clinic|doctor|dentist|pharmacy)$\"](around:3000,40.7589,-73.9851);"
        ));
        assert_eq!(query.matches("(around:").count(), 4);
    }

    #[test]
    fn test_element_deserializes_without_tags() {
        let element: OverpassElement =
            serde_json::from_value(json!({ "type": "way", "id": 9 })).unwrap();
        assert!(element.tags.is_empty());
        assert!(element.center.is_none());
    }

    #[tokio::test]
    async fn test_fetch_posts_form_query_and_parses_elements() {
        let router = Router::new().route(
            "/api/interpreter",
            post(|Form(form): Form<HashMap<String, String>>| async move {
                let query = form.get("data").cloned().unwrap_or_default();
                assert!(query.contains("out center;"));
                Json(json!({
                    "elements": [
                        { "type": "node", "id": 1, "lat": 1.0, "lon": 2.0,
                          "tags": { "amenity": "pharmacy" } }
                    ]
                }))
            }),
        );
        let client = client_for(spawn_upstream(router).await, Duration::from_secs(5));

        let elements = client.fetch_elements(&area()).await.unwrap();

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].id, 1);
        assert_eq!(elements[0].tags.get("amenity").unwrap(), "pharmacy");
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let router = Router::new().route(
            "/api/interpreter",
            post(|| async { (StatusCode::TOO_MANY_REQUESTS, "rate limited") }),
        );
        let client = client_for(spawn_upstream(router).await, Duration::from_secs(5));

        let result = client.fetch_elements(&area()).await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_slow_upstream_is_timeout() {
        let router = Router::new().route(
            "/api/interpreter",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({ "elements": [] }))
            }),
        );
        let client = client_for(spawn_upstream(router).await, Duration::from_millis(200));

        let result = client.fetch_elements(&area()).await;

        assert!(matches!(result, Err(AppError::UpstreamTimeout(_))));
    }
}
