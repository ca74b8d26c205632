use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use crate::error::{Error, ErrorCode, ErrorDomain, Result};
use crate::models::activity::{Activity, NewActivity};

const fn code(sequence: u8) -> ErrorCode {
    ErrorCode::database(ErrorDomain::Activity, sequence)
}

pub async fn insert(conn: &mut PgConnection, activity: &NewActivity) -> Result<Activity> {
    sqlx::query_as::<_, Activity>(
        r#"
        INSERT INTO activities (type, description, actor)
        VALUES ($1, $2, $3)
        RETURNING id, type, description, actor, created_at
        "#,
    )
    .bind(&activity.activity_type)
    .bind(&activity.description)
    .bind(&activity.actor)
    .fetch_one(conn)
    .await
    .map_err(Error::storage("failed to create the activity", code(1)))
}

/// Activities of one type created within `[start, end]`, oldest first.
pub async fn list_by_type_and_period(
    conn: &mut PgConnection,
    activity_type: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<Activity>> {
    sqlx::query_as::<_, Activity>(
        r#"
        SELECT id, type, description, actor, created_at
        FROM activities
        WHERE type = $1 AND created_at >= $2 AND created_at <= $3
        ORDER BY created_at
        "#,
    )
    .bind(activity_type)
    .bind(start)
    .bind(end)
    .fetch_all(conn)
    .await
    .map_err(Error::storage("failed to get the activities", code(2)))
}
