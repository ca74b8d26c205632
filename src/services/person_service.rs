use sqlx::{PgConnection, PgPool};

use crate::error::{Error, ErrorCode, ErrorDomain, Result};
use crate::models::person::{Address, Person};

const SELECT_PERSON: &str =
    "SELECT id, name, cpf, phone, gender, user_id, address_id, curriculum FROM people";

#[derive(Clone)]
pub struct PersonService {
    pool: PgPool,
}

impl PersonService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Person> {
        sqlx::query_as::<_, Person>(&format!("{} WHERE user_id = $1", SELECT_PERSON))
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::storage(
                "failed to get the person",
                ErrorCode::database(ErrorDomain::User, 10),
            ))
    }

    pub async fn find_address(&self, address_id: Option<i32>) -> Result<Option<Address>> {
        let mut conn = self.pool.acquire().await.map_err(Error::storage(
            "failed to get the address",
            ErrorCode::database(ErrorDomain::User, 13),
        ))?;
        find_address(&mut conn, address_id).await
    }
}

pub async fn find_by_id(conn: &mut PgConnection, id: i32) -> Result<Option<Person>> {
    sqlx::query_as::<_, Person>(&format!("{} WHERE id = $1", SELECT_PERSON))
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(Error::storage(
            "failed to get the person",
            ErrorCode::database(ErrorDomain::User, 11),
        ))
}

/// Email of the account a person profile belongs to.
pub async fn find_email(conn: &mut PgConnection, person_id: i32) -> Result<String> {
    sqlx::query_scalar::<_, String>(
        "SELECT u.email FROM people p JOIN users u ON u.id = p.user_id WHERE p.id = $1",
    )
    .bind(person_id)
    .fetch_one(conn)
    .await
    .map_err(Error::storage(
        "failed to get the person",
        ErrorCode::database(ErrorDomain::User, 12),
    ))
}

pub async fn find_address(
    conn: &mut PgConnection,
    address_id: Option<i32>,
) -> Result<Option<Address>> {
    let Some(address_id) = address_id else {
        return Ok(None);
    };
    sqlx::query_as::<_, Address>(
        r#"
        SELECT id, street, number, neighborhood, city, state, zip_code, complement
        FROM addresses
        WHERE id = $1
        "#,
    )
    .bind(address_id)
    .fetch_optional(conn)
    .await
    .map_err(Error::storage(
        "failed to get the address",
        ErrorCode::database(ErrorDomain::User, 13),
    ))
}
