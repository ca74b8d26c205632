use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        activity_dto::{ActivityQuery, CreateActivityRequest},
        response::ApiResponse,
    },
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn create_activity(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateActivityRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;
    let activity = state.activity_service.create(payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data("Activity created successfully", activity)),
    ))
}

#[axum::debug_handler]
pub async fn list_activities(
    State(state): State<AppState>,
    query: std::result::Result<Query<ActivityQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(query) = query?;
    let activities = state
        .activity_service
        .list_by_type_and_period(&query.activity_type, query.start_date, query.end_date)
        .await?;
    Ok(Json(ApiResponse::with_data(
        "Activities retrieved successfully",
        activities,
    )))
}
