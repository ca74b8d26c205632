use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::activity::{Activity, NewActivity};
use crate::repositories::activity_repo;
use crate::services::auth_service::ActivityRecorder;
use crate::utils::time::from_unix;

#[derive(Clone)]
pub struct ActivityService {
    pool: PgPool,
}

impl ActivityService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, activity: NewActivity) -> Result<Activity> {
        let mut conn = self.pool.acquire().await?;
        let created = activity_repo::insert(&mut conn, &activity).await?;
        info!(id = created.id, activity_type = %created.activity_type, "Activity recorded");
        Ok(created)
    }

    /// Activities of one type between two unix timestamps (seconds, inclusive).
    pub async fn list_by_type_and_period(
        &self,
        activity_type: &str,
        start_date: i64,
        end_date: i64,
    ) -> Result<Vec<Activity>> {
        let start = from_unix(start_date)
            .map_err(|_| Error::BadRequest("Invalid start date".to_string()))?;
        let end =
            from_unix(end_date).map_err(|_| Error::BadRequest("Invalid end date".to_string()))?;

        let mut conn = self.pool.acquire().await?;
        activity_repo::list_by_type_and_period(&mut conn, activity_type, start, end).await
    }
}

#[async_trait]
impl ActivityRecorder for ActivityService {
    async fn record(&self, activity: NewActivity) -> Result<Activity> {
        self.create(activity).await
    }
}
