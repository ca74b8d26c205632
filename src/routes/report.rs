use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::response::ApiResponse,
    error::{Error, Result},
    models::report::Period,
    AppState,
};

#[axum::debug_handler]
pub async fn disability_totals(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let totals = state.report_service.disability_totals().await?;
    Ok(Json(ApiResponse::with_data("Disability totals", totals)))
}

#[axum::debug_handler]
pub async fn disability_totals_by_neighborhood(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(neighborhood) = path?;
    let totals = state
        .report_service
        .disability_totals_by_neighborhood(&neighborhood)
        .await?;
    Ok(Json(ApiResponse::with_data(
        format!("Disability totals by neighborhood: {}", neighborhood),
        totals,
    )))
}

#[axum::debug_handler]
pub async fn activity_counts(
    State(state): State<AppState>,
    path: std::result::Result<Path<(String, String)>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path((activity_type, period)) = path?;
    let period =
        Period::parse(&period).ok_or_else(|| Error::BadRequest("Invalid period".to_string()))?;
    let counts = state
        .report_service
        .activity_counts(&activity_type, period)
        .await?;
    Ok(Json(ApiResponse::with_data(
        "Activities counted by period",
        counts,
    )))
}
