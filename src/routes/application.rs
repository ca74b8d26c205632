use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        application_dto::{ApplyRequest, StatusQuery},
        response::ApiResponse,
    },
    error::{Error, Result},
    models::application::ApplyStatus,
    AppState,
};

#[axum::debug_handler]
pub async fn apply(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ApplyRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    state
        .application_service
        .apply(payload.candidate_id, payload.vacancy_id)
        .await?;
    Ok(Json(ApiResponse::message(
        "candidate applied to the vacancy successfully",
    )))
}

#[axum::debug_handler]
pub async fn list_applications(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(vacancy_id) = path?;
    let applications = state.application_service.list_by_vacancy(vacancy_id).await?;
    Ok(Json(ApiResponse::with_data(
        "vacancy applies listed successfully",
        applications,
    )))
}

#[axum::debug_handler]
pub async fn update_status(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
    query: std::result::Result<Query<StatusQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Path(apply_id) = path?;
    let Query(query) = query?;
    let status: ApplyStatus = query.status.parse().map_err(Error::BadRequest)?;
    state
        .application_service
        .update_status(apply_id, status)
        .await?;
    Ok(Json(ApiResponse::message(
        "vacancy apply status updated successfully",
    )))
}
