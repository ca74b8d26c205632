use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use validator::Validate;

use crate::{
    dto::{
        auth_dto::{Credentials, LoginData, TokenRequest, UserInfo, UserProfile},
        response::ApiResponse,
    },
    error::Result,
    models::role::Role,
    AppState,
};

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Credentials>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(credentials) = payload?;
    credentials.validate()?;

    let (token, user) = state
        .auth_service
        .login(&credentials.email, &credentials.password)
        .await?;

    Ok(Json(ApiResponse::with_data(
        "login successful",
        LoginData {
            token,
            user: UserInfo::from(&user),
        },
    )))
}

/// Resolves the caller's profile from a token in the body. Lookup failures
/// answer 500, matching what existing clients expect from this endpoint.
#[axum::debug_handler]
pub async fn get_user_data(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TokenRequest>, JsonRejection>,
) -> Response {
    let token = match payload {
        Ok(Json(req)) if !req.token.trim().is_empty() => req.token,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::message("token not found")),
            )
                .into_response()
        }
    };

    match load_profile(&state, &token).await {
        Ok(profile) => Json(ApiResponse::with_data("user data retrieved", profile)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to resolve user data from token");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::message(err.public_message())),
            )
                .into_response()
        }
    }
}

async fn load_profile(state: &AppState, token: &str) -> Result<UserProfile> {
    let user = state.auth_service.user_from_token(token).await?;
    let info = UserInfo::from(&user);

    match user.role {
        Role::Company => {
            let company = state.company_service.find_by_user_id(user.id).await?;
            let address = state.person_service.find_address(company.address_id).await?;
            Ok(UserProfile::Company {
                user: info,
                company,
                address,
            })
        }
        Role::User => {
            let person = state.person_service.find_by_user_id(user.id).await?;
            let address = state.person_service.find_address(person.address_id).await?;
            Ok(UserProfile::Person {
                user: info,
                person,
                address,
            })
        }
        Role::Admin => Ok(UserProfile::Admin { user: info }),
    }
}
