pub mod activity_service;
pub mod application_service;
pub mod auth_service;
pub mod company_service;
pub mod disability_service;
pub mod person_service;
pub mod report_service;
pub mod token_service;
pub mod user_service;
pub mod vacancy_service;
