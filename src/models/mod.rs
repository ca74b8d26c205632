pub mod activity;
pub mod application;
pub mod company;
pub mod disability;
pub mod person;
pub mod report;
pub mod role;
pub mod user;
pub mod vacancy;
