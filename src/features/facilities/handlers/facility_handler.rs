use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::facilities::dtos::{FacilityDto, NearbyQueryParams};
use crate::features::facilities::services::FacilityService;
use crate::shared::types::ApiResponse;

/// Search medical facilities around a point
///
/// Returns live OpenStreetMap results followed by every curated facility.
/// `meta.total` is the merged count.
#[utoipa::path(
    get,
    path = "/api/nearby",
    params(NearbyQueryParams),
    responses(
        (status = 200, description = "Facilities around the point", body = ApiResponse<Vec<FacilityDto>>),
        (status = 400, description = "Missing or malformed lat/lon/radius"),
        (status = 500, description = "Facility search service failed"),
        (status = 504, description = "Facility search service timed out")
    ),
    tag = "facilities"
)]
pub async fn nearby_facilities(
    State(service): State<Arc<FacilityService>>,
    Query(params): Query<NearbyQueryParams>,
) -> Result<Json<ApiResponse<Vec<FacilityDto>>>> {
    let facilities = service.find_nearby(params).await?;
    Ok(Json(ApiResponse::list(facilities)))
}
