use sqlx::{PgConnection, PgPool};

use crate::error::{Error, ErrorCode, ErrorDomain, Result};
use crate::models::company::Company;

#[derive(Clone)]
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Company> {
        sqlx::query_as::<_, Company>(
            "SELECT id, name, cnpj, phone, user_id, address_id FROM companies WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::storage(
            "failed to get the company",
            ErrorCode::database(ErrorDomain::User, 20),
        ))
    }
}

pub async fn exists(conn: &mut PgConnection, id: i32) -> Result<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM companies WHERE id = $1)")
        .bind(id)
        .fetch_one(conn)
        .await
        .map_err(Error::storage(
            "failed to get the company",
            ErrorCode::database(ErrorDomain::User, 21),
        ))
}
