use sqlx::PgPool;
use tracing::info;

use crate::database::UnitOfWork;
use crate::dto::disability_dto::DisabilityRequest;
use crate::error::{Error, ErrorCode, ErrorDomain, Result};
use crate::models::disability::Disability;
use crate::repositories::disability_repo;

#[derive(Clone)]
pub struct DisabilityService {
    pool: PgPool,
}

impl DisabilityService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Disability>> {
        let mut conn = self.pool.acquire().await?;
        disability_repo::list(&mut conn).await
    }

    /// Inserts the whole batch or nothing.
    pub async fn create_batch(&self, batch: &[DisabilityRequest]) -> Result<Vec<i32>> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let mut ids = Vec::with_capacity(batch.len());
        for item in batch {
            let id = disability_repo::insert(uow.conn(), item.category, &item.description, item.rate)
                .await
                .map_err(|e| match e {
                    conflict @ Error::Conflict { .. } => conflict,
                    other => Error::failed(
                        "failed to create the disabilities",
                        ErrorCode::service(ErrorDomain::Disability, 1),
                        other,
                    ),
                })?;
            ids.push(id);
        }
        uow.commit().await?;

        info!(count = ids.len(), "Disabilities created");
        Ok(ids)
    }
}
