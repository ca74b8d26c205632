//! Statement-level data access. Every function takes `&mut PgConnection` so
//! callers decide whether it runs on a pooled connection or inside a
//! [`crate::database::UnitOfWork`].

pub mod activity_repo;
pub mod application_repo;
pub mod disability_repo;
pub mod vacancy_children_repo;
pub mod vacancy_repo;
