pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    activity_service::ActivityService, application_service::ApplicationService,
    auth_service::AuthService, company_service::CompanyService,
    disability_service::DisabilityService, person_service::PersonService,
    report_service::ReportService, token_service::TokenService, user_service::UserService,
    vacancy_service::VacancyService,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub tokens: TokenService,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub vacancy_service: VacancyService,
    pub application_service: ApplicationService,
    pub report_service: ReportService,
    pub activity_service: ActivityService,
    pub disability_service: DisabilityService,
    pub person_service: PersonService,
    pub company_service: CompanyService,
}

impl AppState {
    pub fn new(pool: PgPool, config: Arc<Config>) -> Result<Self> {
        let tokens = TokenService::new(&config)?;

        let user_service = UserService::new(pool.clone());
        let activity_service = ActivityService::new(pool.clone());
        let auth_service = AuthService::new(
            Arc::new(user_service.clone()),
            Arc::new(activity_service.clone()),
            tokens.clone(),
        );

        Ok(Self {
            vacancy_service: VacancyService::new(pool.clone()),
            application_service: ApplicationService::new(pool.clone()),
            report_service: ReportService::new(pool.clone()),
            disability_service: DisabilityService::new(pool.clone()),
            person_service: PersonService::new(pool.clone()),
            company_service: CompanyService::new(pool.clone()),
            auth_service,
            user_service,
            activity_service,
            tokens,
            config,
            pool,
        })
    }
}
