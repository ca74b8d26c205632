pub mod activity_dto;
pub mod application_dto;
pub mod auth_dto;
pub mod disability_dto;
pub mod response;
pub mod vacancy_dto;
