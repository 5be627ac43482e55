use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::hospitals::dtos::{
    parse_hospital_id, CreateHospitalDto, HospitalResponseDto, UpdateHospitalDto,
};
use crate::features::hospitals::services::HospitalService;
use crate::shared::types::ApiResponse;

/// List every curated facility
#[utoipa::path(
    get,
    path = "/api/hospitals",
    responses(
        (status = 200, description = "Curated facilities", body = ApiResponse<Vec<HospitalResponseDto>>),
    ),
    tag = "hospitals"
)]
pub async fn list_hospitals(
    State(service): State<Arc<HospitalService>>,
) -> Result<Json<ApiResponse<Vec<HospitalResponseDto>>>> {
    let hospitals = service.list().await?;
    Ok(Json(ApiResponse::list(hospitals)))
}

/// Create a curated facility
#[utoipa::path(
    post,
    path = "/api/hospitals",
    request_body = CreateHospitalDto,
    responses(
        (status = 201, description = "Hospital created successfully", body = ApiResponse<HospitalResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "hospitals"
)]
pub async fn create_hospital(
    State(service): State<Arc<HospitalService>>,
    AppJson(dto): AppJson<CreateHospitalDto>,
) -> Result<(StatusCode, Json<ApiResponse<HospitalResponseDto>>)> {
    let new = dto.into_new()?;

    let hospital = service.create(new).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(hospital),
            Some("Hospital created successfully".to_string()),
            None,
        )),
    ))
}

/// Get a curated facility
#[utoipa::path(
    get,
    path = "/api/hospitals/{id}",
    params(
        ("id" = String, Path, description = "Hospital id (`12` or `hospital_12`)")
    ),
    responses(
        (status = 200, description = "Hospital found", body = ApiResponse<HospitalResponseDto>),
        (status = 404, description = "Hospital not found")
    ),
    tag = "hospitals"
)]
pub async fn get_hospital(
    State(service): State<Arc<HospitalService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<HospitalResponseDto>>> {
    let id = parse_hospital_id(&id)?;

    let hospital = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(hospital), None, None)))
}

/// Partially update a curated facility
#[utoipa::path(
    put,
    path = "/api/hospitals/{id}",
    params(
        ("id" = String, Path, description = "Hospital id (`12` or `hospital_12`)")
    ),
    request_body = UpdateHospitalDto,
    responses(
        (status = 200, description = "Hospital updated successfully", body = ApiResponse<HospitalResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Hospital not found")
    ),
    tag = "hospitals"
)]
pub async fn update_hospital(
    State(service): State<Arc<HospitalService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateHospitalDto>,
) -> Result<Json<ApiResponse<HospitalResponseDto>>> {
    let id = parse_hospital_id(&id)?;
    dto.check()?;

    let hospital = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(hospital),
        Some("Hospital updated successfully".to_string()),
        None,
    )))
}

/// Delete a curated facility
#[utoipa::path(
    delete,
    path = "/api/hospitals/{id}",
    params(
        ("id" = String, Path, description = "Hospital id (`12` or `hospital_12`)")
    ),
    responses(
        (status = 200, description = "Hospital deleted successfully"),
        (status = 404, description = "Hospital not found")
    ),
    tag = "hospitals"
)]
pub async fn delete_hospital(
    State(service): State<Arc<HospitalService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    let id = parse_hospital_id(&id)?;

    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Hospital deleted successfully".to_string()),
        None,
    )))
}
