use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{disability_dto::DisabilityRequest, response::ApiResponse},
    error::{Error, Result},
    AppState,
};

#[axum::debug_handler]
pub async fn list_disabilities(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let disabilities = state.disability_service.list().await?;
    Ok(Json(ApiResponse::with_data(
        "disabilities listed successfully",
        disabilities,
    )))
}

#[axum::debug_handler]
pub async fn create_disabilities(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Vec<DisabilityRequest>>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(batch) = payload?;
    if batch.is_empty() {
        return Err(Error::BadRequest(
            "at least one disability is required".to_string(),
        ));
    }
    for item in &batch {
        item.validate()?;
    }

    let ids = state.disability_service.create_batch(&batch).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data("disabilities created successfully", ids)),
    ))
}
