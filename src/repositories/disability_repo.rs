use sqlx::PgConnection;

use crate::error::{Error, ErrorCode, ErrorDomain, Result};
use crate::models::disability::{Disability, DisabilityCategory, PersonDisability};

const fn code(sequence: u8) -> ErrorCode {
    ErrorCode::database(ErrorDomain::Disability, sequence)
}

pub async fn insert(
    conn: &mut PgConnection,
    category: DisabilityCategory,
    description: &str,
    rate: i32,
) -> Result<i32> {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO disabilities (category, description, rate) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(category)
    .bind(description)
    .bind(rate)
    .fetch_one(conn)
    .await
    .map_err(|e| {
        if Error::is_unique_violation(&e) {
            Error::conflict("the disability already exists", code(1))
        } else {
            Error::storage("failed to create the disability", code(1))(e)
        }
    })
}

/// Returns `true` when a row was inserted, `false` when it already existed.
pub async fn insert_if_absent(
    conn: &mut PgConnection,
    category: DisabilityCategory,
    description: &str,
    rate: i32,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO disabilities (category, description, rate)
        VALUES ($1, $2, $3)
        ON CONFLICT (category, description) DO NOTHING
        "#,
    )
    .bind(category)
    .bind(description)
    .bind(rate)
    .execute(conn)
    .await
    .map_err(Error::storage("failed to seed the disabilities", code(2)))?;

    Ok(result.rows_affected() > 0)
}

pub async fn list(conn: &mut PgConnection) -> Result<Vec<Disability>> {
    sqlx::query_as::<_, Disability>(
        "SELECT id, category, description, rate FROM disabilities ORDER BY category, id",
    )
    .fetch_all(conn)
    .await
    .map_err(Error::storage("failed to list the disabilities", code(3)))
}

pub async fn list_by_person(conn: &mut PgConnection, person_id: i32) -> Result<Vec<PersonDisability>> {
    sqlx::query_as::<_, PersonDisability>(
        r#"
        SELECT d.id, d.category, d.description, d.rate, pd.acquired
        FROM person_disabilities pd
        JOIN disabilities d ON d.id = pd.disability_id
        WHERE pd.person_id = $1
        ORDER BY d.id
        "#,
    )
    .bind(person_id)
    .fetch_all(conn)
    .await
    .map_err(Error::storage("failed to get the candidate disabilities", code(4)))
}

/// `(category, count)` over every person-disability link.
pub async fn count_by_category(conn: &mut PgConnection) -> Result<Vec<(DisabilityCategory, i64)>> {
    sqlx::query_as::<_, (DisabilityCategory, i64)>(
        r#"
        SELECT d.category, COUNT(*)
        FROM person_disabilities pd
        JOIN disabilities d ON d.id = pd.disability_id
        GROUP BY d.category
        "#,
    )
    .fetch_all(conn)
    .await
    .map_err(Error::storage("failed to count the disabilities", code(5)))
}

/// `(category, neighborhood, count)` for people that have an address.
pub async fn count_by_category_and_neighborhood(
    conn: &mut PgConnection,
) -> Result<Vec<(DisabilityCategory, String, i64)>> {
    sqlx::query_as::<_, (DisabilityCategory, String, i64)>(
        r#"
        SELECT d.category, a.neighborhood, COUNT(*)
        FROM person_disabilities pd
        JOIN disabilities d ON d.id = pd.disability_id
        JOIN people p ON p.id = pd.person_id
        JOIN addresses a ON a.id = p.address_id
        GROUP BY d.category, a.neighborhood
        "#,
    )
    .fetch_all(conn)
    .await
    .map_err(Error::storage("failed to count the disabilities by neighborhood", code(6)))
}
