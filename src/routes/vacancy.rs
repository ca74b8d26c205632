use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        response::ApiResponse,
        vacancy_dto::{CreatedVacancy, VacancyDetailQuery, VacancyListQuery, VacancyRequest},
    },
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn create_vacancy(
    State(state): State<AppState>,
    payload: std::result::Result<Json<VacancyRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;
    let id = state.vacancy_service.create(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data(
            "vacancy created successfully",
            CreatedVacancy { id },
        )),
    ))
}

#[axum::debug_handler]
pub async fn update_vacancy(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
    payload: std::result::Result<Json<VacancyRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    payload.validate()?;
    state.vacancy_service.update(id, &payload).await?;
    Ok(Json(ApiResponse::message("vacancy updated successfully")))
}

#[axum::debug_handler]
pub async fn delete_vacancy(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = path?;
    state.vacancy_service.delete(id).await?;
    Ok(Json(ApiResponse::message("vacancy deleted successfully")))
}

#[axum::debug_handler]
pub async fn list_vacancies(
    State(state): State<AppState>,
    query: std::result::Result<Query<VacancyListQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(query) = query?;
    let vacancies = state.vacancy_service.list(&query).await?;
    Ok(Json(ApiResponse::with_data(
        "vacancies listed successfully",
        vacancies,
    )))
}

#[axum::debug_handler]
pub async fn get_vacancy(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
    query: std::result::Result<Query<VacancyDetailQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = path?;
    let Query(query) = query?;
    let vacancy = state.vacancy_service.get(id, query.candidate_id).await?;
    Ok(Json(ApiResponse::with_data(
        "vacancy retrieved successfully",
        vacancy,
    )))
}
