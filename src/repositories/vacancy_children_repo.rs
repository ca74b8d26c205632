use sqlx::PgConnection;

use crate::dto::vacancy_dto::RequirementRequest;
use crate::error::{Error, ErrorCode, ErrorDomain, Result};
use crate::models::vacancy::{
    VacancyDisabilityTag, VacancyRequirement, VacancyResponsibility, VacancySkill,
};

const fn code(sequence: u8) -> ErrorCode {
    ErrorCode::database(ErrorDomain::Vacancy, sequence)
}

pub async fn insert_skill(conn: &mut PgConnection, vacancy_id: i32, skill: &str) -> Result<()> {
    sqlx::query("INSERT INTO vacancy_skills (vacancy_id, skill) VALUES ($1, $2)")
        .bind(vacancy_id)
        .bind(skill)
        .execute(conn)
        .await
        .map_err(Error::storage("failed to create the skill", code(10)))?;
    Ok(())
}

pub async fn insert_requirement(
    conn: &mut PgConnection,
    vacancy_id: i32,
    requirement: &RequirementRequest,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO vacancy_requirements (vacancy_id, requirement, requirement_type) VALUES ($1, $2, $3)",
    )
    .bind(vacancy_id)
    .bind(&requirement.requirement)
    .bind(requirement.requirement_type)
    .execute(conn)
    .await
    .map_err(Error::storage("failed to create the requirement", code(11)))?;
    Ok(())
}

pub async fn insert_responsibility(
    conn: &mut PgConnection,
    vacancy_id: i32,
    responsibility: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO vacancy_responsibilities (vacancy_id, responsibility) VALUES ($1, $2)",
    )
    .bind(vacancy_id)
    .bind(responsibility)
    .execute(conn)
    .await
    .map_err(Error::storage("failed to create the responsibility", code(12)))?;
    Ok(())
}

/// Tags a vacancy with a disability. Re-tagging the same pair is a no-op.
pub async fn upsert_disability(
    conn: &mut PgConnection,
    vacancy_id: i32,
    disability_id: i32,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO vacancy_disabilities (vacancy_id, disability_id)
        VALUES ($1, $2)
        ON CONFLICT (vacancy_id, disability_id) DO NOTHING
        "#,
    )
    .bind(vacancy_id)
    .bind(disability_id)
    .execute(conn)
    .await
    .map_err(Error::storage("failed to create the vacancy disability", code(13)))?;
    Ok(())
}

pub async fn delete_skills(conn: &mut PgConnection, vacancy_id: i32) -> Result<()> {
    sqlx::query("DELETE FROM vacancy_skills WHERE vacancy_id = $1")
        .bind(vacancy_id)
        .execute(conn)
        .await
        .map_err(Error::storage("failed to delete the skills", code(14)))?;
    Ok(())
}

pub async fn delete_requirements(conn: &mut PgConnection, vacancy_id: i32) -> Result<()> {
    sqlx::query("DELETE FROM vacancy_requirements WHERE vacancy_id = $1")
        .bind(vacancy_id)
        .execute(conn)
        .await
        .map_err(Error::storage("failed to delete the requirements", code(15)))?;
    Ok(())
}

pub async fn delete_responsibilities(conn: &mut PgConnection, vacancy_id: i32) -> Result<()> {
    sqlx::query("DELETE FROM vacancy_responsibilities WHERE vacancy_id = $1")
        .bind(vacancy_id)
        .execute(conn)
        .await
        .map_err(Error::storage("failed to delete the responsibilities", code(16)))?;
    Ok(())
}

pub async fn delete_disabilities(conn: &mut PgConnection, vacancy_id: i32) -> Result<()> {
    sqlx::query("DELETE FROM vacancy_disabilities WHERE vacancy_id = $1")
        .bind(vacancy_id)
        .execute(conn)
        .await
        .map_err(Error::storage("failed to delete the vacancy disabilities", code(17)))?;
    Ok(())
}

pub async fn list_skills(conn: &mut PgConnection, vacancy_id: i32) -> Result<Vec<VacancySkill>> {
    sqlx::query_as::<_, VacancySkill>(
        "SELECT id, vacancy_id, skill FROM vacancy_skills WHERE vacancy_id = $1 ORDER BY id",
    )
    .bind(vacancy_id)
    .fetch_all(conn)
    .await
    .map_err(Error::storage("failed to get the skills", code(18)))
}

pub async fn list_requirements(
    conn: &mut PgConnection,
    vacancy_id: i32,
) -> Result<Vec<VacancyRequirement>> {
    sqlx::query_as::<_, VacancyRequirement>(
        r#"
        SELECT id, vacancy_id, requirement, requirement_type
        FROM vacancy_requirements
        WHERE vacancy_id = $1
        ORDER BY id
        "#,
    )
    .bind(vacancy_id)
    .fetch_all(conn)
    .await
    .map_err(Error::storage("failed to get the requirements", code(19)))
}

pub async fn list_responsibilities(
    conn: &mut PgConnection,
    vacancy_id: i32,
) -> Result<Vec<VacancyResponsibility>> {
    sqlx::query_as::<_, VacancyResponsibility>(
        r#"
        SELECT id, vacancy_id, responsibility
        FROM vacancy_responsibilities
        WHERE vacancy_id = $1
        ORDER BY id
        "#,
    )
    .bind(vacancy_id)
    .fetch_all(conn)
    .await
    .map_err(Error::storage("failed to get the responsibilities", code(20)))
}

/// Disability tags for a set of vacancies, so a listing page needs one query.
pub async fn list_disabilities(
    conn: &mut PgConnection,
    vacancy_ids: &[i32],
) -> Result<Vec<VacancyDisabilityTag>> {
    sqlx::query_as::<_, VacancyDisabilityTag>(
        r#"
        SELECT vd.vacancy_id, d.id, d.category, d.description, d.rate
        FROM vacancy_disabilities vd
        JOIN disabilities d ON d.id = vd.disability_id
        WHERE vd.vacancy_id = ANY($1)
        ORDER BY vd.vacancy_id, d.id
        "#,
    )
    .bind(vacancy_ids)
    .fetch_all(conn)
    .await
    .map_err(Error::storage("failed to get the disabilities", code(21)))
}
