use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{Error, ErrorCode, ErrorDomain, Result};
use crate::models::role::Role;
use crate::models::user::User;
use crate::services::auth_service::CredentialStore;
use crate::utils::crypto::hash_password;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, role, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::storage(
            "failed to get the user",
            ErrorCode::database(ErrorDomain::User, 1),
        ))
    }

    /// Creates an account with an argon2-hashed password.
    pub async fn create(&self, email: &str, password: &str, role: Role) -> Result<User> {
        let password_hash = hash_password(password)?;
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, role, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if Error::is_unique_violation(&e) {
                Error::conflict(
                    "a user with this email already exists",
                    ErrorCode::database(ErrorDomain::User, 2),
                )
            } else {
                Error::storage(
                    "failed to create the user",
                    ErrorCode::database(ErrorDomain::User, 2),
                )(e)
            }
        })
    }
}

#[async_trait]
impl CredentialStore for UserService {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        UserService::find_by_email(self, email).await
    }
}
