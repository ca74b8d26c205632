pub mod activity;
pub mod application;
pub mod auth;
pub mod disability;
pub mod health;
pub mod report;
pub mod vacancy;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{
        auth::{require_role, RoleGuard, ADMIN_ONLY, COMPANY_ONLY},
        cors::api_cors,
        rate_limit::{rps_middleware, RateLimiter},
    },
    AppState,
};

/// The full HTTP surface. Company-only and admin-only groups sit behind the
/// role guard; everything else is public and rate limited.
pub fn build_router(state: AppState) -> Router {
    let company_guard = RoleGuard::new(state.tokens.clone(), COMPANY_ONLY);
    let admin_guard = RoleGuard::new(state.tokens.clone(), ADMIN_ONLY);

    let public_api = Router::new()
        .route("/login", post(auth::login))
        .route("/get-user-data", post(auth::get_user_data))
        .route("/vacancies", get(vacancy::list_vacancies))
        .route("/vacancies/:id", get(vacancy::get_vacancy))
        .route("/vacancies/apply", post(application::apply))
        .route("/reports/disabilities", get(report::disability_totals))
        .route(
            "/reports/disabilities/:neighborhood",
            get(report::disability_totals_by_neighborhood),
        )
        .route(
            "/reports/activities/:type/:period",
            get(report::activity_counts),
        )
        .route("/activities", get(activity::list_activities))
        .route("/disabilities", get(disability::list_disabilities))
        .layer(from_fn_with_state(
            RateLimiter::new(state.config.public_rps),
            rps_middleware,
        ));

    let company_api = Router::new()
        .route("/vacancies", post(vacancy::create_vacancy))
        .route(
            "/vacancies/:id",
            put(vacancy::update_vacancy).delete(vacancy::delete_vacancy),
        )
        .route(
            "/vacancies/apply/:id",
            get(application::list_applications).patch(application::update_status),
        )
        .route_layer(from_fn_with_state(company_guard, require_role));

    let admin_api = Router::new()
        .route("/activities", post(activity::create_activity))
        .route("/disabilities", post(disability::create_disabilities))
        .route_layer(from_fn_with_state(admin_guard, require_role));

    Router::new()
        .route("/health", get(health::health))
        .merge(public_api)
        .merge(company_api)
        .merge(admin_api)
        .with_state(state)
        .layer(api_cors())
        .layer(TraceLayer::new_for_http())
}
