use sqlx::PgConnection;

use crate::error::{Error, ErrorCode, ErrorDomain, Result};
use crate::models::application::{ApplyStatus, VacancyApply};

const fn code(sequence: u8) -> ErrorCode {
    ErrorCode::database(ErrorDomain::Application, sequence)
}

const SELECT_APPLY: &str =
    "SELECT id, vacancy_id, candidate_id, status, created_at, updated_at FROM vacancy_applies";

/// Inserts a new application in the `applied` state.
///
/// The raw driver error is returned untouched so the caller can tell a
/// duplicate (unique violation) apart from other failures.
pub async fn insert(
    conn: &mut PgConnection,
    vacancy_id: i32,
    candidate_id: i32,
) -> std::result::Result<i32, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO vacancy_applies (vacancy_id, candidate_id, status)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(vacancy_id)
    .bind(candidate_id)
    .bind(ApplyStatus::Applied)
    .fetch_one(conn)
    .await
}

pub async fn exists_for_candidate(
    conn: &mut PgConnection,
    vacancy_id: i32,
    candidate_id: i32,
) -> Result<bool> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM vacancy_applies WHERE vacancy_id = $1 AND candidate_id = $2)",
    )
    .bind(vacancy_id)
    .bind(candidate_id)
    .fetch_one(conn)
    .await
    .map_err(Error::storage("failed to get the vacancy apply", code(2)))
}

pub async fn list_by_vacancy(conn: &mut PgConnection, vacancy_id: i32) -> Result<Vec<VacancyApply>> {
    sqlx::query_as::<_, VacancyApply>(&format!(
        "{} WHERE vacancy_id = $1 ORDER BY id",
        SELECT_APPLY
    ))
    .bind(vacancy_id)
    .fetch_all(conn)
    .await
    .map_err(Error::storage("failed to get the vacancy applies", code(3)))
}

/// Ids of the vacancies among `vacancy_ids` the candidate has applied to.
pub async fn applied_vacancy_ids(
    conn: &mut PgConnection,
    candidate_id: i32,
    vacancy_ids: &[i32],
) -> Result<Vec<i32>> {
    sqlx::query_scalar::<_, i32>(
        "SELECT vacancy_id FROM vacancy_applies WHERE candidate_id = $1 AND vacancy_id = ANY($2)",
    )
    .bind(candidate_id)
    .bind(vacancy_ids)
    .fetch_all(conn)
    .await
    .map_err(Error::storage("failed to get the vacancy applies", code(3)))
}

pub async fn update_status(conn: &mut PgConnection, id: i32, status: ApplyStatus) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE vacancy_applies SET status = $2, updated_at = NOW() WHERE id = $1",
    )
    .bind(id)
    .bind(status)
    .execute(conn)
    .await
    .map_err(Error::storage("failed to update the vacancy apply status", code(5)))?;

    Ok(result.rows_affected())
}

pub async fn delete_by_vacancy(conn: &mut PgConnection, vacancy_id: i32) -> Result<()> {
    sqlx::query("DELETE FROM vacancy_applies WHERE vacancy_id = $1")
        .bind(vacancy_id)
        .execute(conn)
        .await
        .map_err(Error::storage("failed to delete the vacancy applies", code(6)))?;
    Ok(())
}
