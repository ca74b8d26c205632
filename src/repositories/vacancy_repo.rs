use sqlx::{PgConnection, Postgres, QueryBuilder};

use crate::dto::vacancy_dto::{VacancyListQuery, VacancyRequest};
use crate::error::{Error, ErrorCode, ErrorDomain, Result};
use crate::models::vacancy::Vacancy;

const SELECT_VACANCY: &str = r#"
    SELECT v.id, v.code, v.title, v.description, v.department, v.section, v.shift,
           v.publish_date, v.registration_date, v.area, v.contract_type, v.company_id,
           c.name AS company_name, v.created_at, v.updated_at
    FROM vacancies v
    JOIN companies c ON c.id = v.company_id
"#;

const fn code(sequence: u8) -> ErrorCode {
    ErrorCode::database(ErrorDomain::Vacancy, sequence)
}

pub async fn insert(conn: &mut PgConnection, req: &VacancyRequest) -> Result<i32> {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO vacancies (
            code, title, description, department, section, shift,
            publish_date, registration_date, area, contract_type, company_id
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id
        "#,
    )
    .bind(&req.code)
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.department)
    .bind(&req.section)
    .bind(&req.shift)
    .bind(req.publish_date)
    .bind(req.registration_date)
    .bind(&req.area)
    .bind(req.contract_type)
    .bind(req.company_id)
    .fetch_one(conn)
    .await
    .map_err(Error::storage("failed to create the vacancy", code(1)))
}

pub async fn update(conn: &mut PgConnection, id: i32, req: &VacancyRequest) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE vacancies
        SET code = $2, title = $3, description = $4, department = $5, section = $6,
            shift = $7, publish_date = $8, registration_date = $9, area = $10,
            contract_type = $11, company_id = $12, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(&req.code)
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.department)
    .bind(&req.section)
    .bind(&req.shift)
    .bind(req.publish_date)
    .bind(req.registration_date)
    .bind(&req.area)
    .bind(req.contract_type)
    .bind(req.company_id)
    .execute(conn)
    .await
    .map_err(Error::storage("failed to update the vacancy", code(2)))?;

    Ok(result.rows_affected())
}

pub async fn delete(conn: &mut PgConnection, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM vacancies WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await
        .map_err(Error::storage("failed to delete the vacancy", code(3)))?;

    Ok(result.rows_affected())
}

pub async fn exists(conn: &mut PgConnection, id: i32) -> Result<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM vacancies WHERE id = $1)")
        .bind(id)
        .fetch_one(conn)
        .await
        .map_err(Error::storage("failed to get the vacancy", code(4)))
}

pub async fn find_by_id(conn: &mut PgConnection, id: i32) -> Result<Vacancy> {
    sqlx::query_as::<_, Vacancy>(&format!("{} WHERE v.id = $1", SELECT_VACANCY))
        .bind(id)
        .fetch_one(conn)
        .await
        .map_err(Error::storage("failed to get the vacancy", code(4)))
}

/// One page of vacancies matching the column filters, newest first, starting
/// at row `offset`.
///
/// Disability and candidate filters are not applied here; they need the
/// child tables and are evaluated by the caller on the returned page.
pub async fn list(
    conn: &mut PgConnection,
    query: &VacancyListQuery,
    offset: i64,
) -> Result<Vec<Vacancy>> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_VACANCY);
    builder.push(" WHERE 1 = 1");

    if let Some(company_id) = query.company_id.filter(|id| *id > 0) {
        builder.push(" AND v.company_id = ");
        builder.push_bind(company_id);
    }
    if let Some(contract_type) = query.contract_type {
        builder.push(" AND v.contract_type = ");
        builder.push_bind(contract_type);
    }
    if let Some(area) = query.area.as_deref().filter(|a| !a.trim().is_empty()) {
        builder.push(" AND v.area = ");
        builder.push_bind(area.to_string());
    }
    if let Some(text) = query.search_text.as_deref().filter(|t| !t.trim().is_empty()) {
        let pattern = format!("%{}%", text.trim());
        builder.push(" AND (v.code ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR v.title ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }

    builder.push(" ORDER BY v.id DESC LIMIT ");
    builder.push_bind(query.per_page());
    builder.push(" OFFSET ");
    builder.push_bind(offset);

    builder
        .build_query_as::<Vacancy>()
        .fetch_all(conn)
        .await
        .map_err(Error::storage("failed to list the vacancies", code(5)))
}
