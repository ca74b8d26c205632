use sqlx::PgPool;
use tracing::{info, warn};

use crate::dto::application_dto::{ApplicationDetail, CandidateProfile};
use crate::error::{Error, ErrorCode, ErrorDomain, Result};
use crate::models::application::ApplyStatus;
use crate::repositories::{application_repo, disability_repo, vacancy_repo};
use crate::services::person_service;

pub const ALREADY_APPLIED: &str = "the candidate already applied to the vacancy";

const fn code(sequence: u8) -> ErrorCode {
    ErrorCode::service(ErrorDomain::Application, sequence)
}

/// Candidate applications and their review status.
#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registers an application in the `applied` state. A candidate can apply
    /// to a vacancy once; the unique index on `(vacancy_id, candidate_id)`
    /// settles concurrent attempts.
    pub async fn apply(&self, candidate_id: i32, vacancy_id: i32) -> Result<i32> {
        let mut conn = self.pool.acquire().await?;

        if !vacancy_repo::exists(&mut conn, vacancy_id).await? {
            return Err(Error::NotFound("vacancy not found".to_string()));
        }
        if person_service::find_by_id(&mut conn, candidate_id).await?.is_none() {
            return Err(Error::NotFound("candidate not found".to_string()));
        }
        if application_repo::exists_for_candidate(&mut conn, vacancy_id, candidate_id).await? {
            return Err(Error::conflict(ALREADY_APPLIED, code(1)));
        }

        match application_repo::insert(&mut conn, vacancy_id, candidate_id).await {
            Ok(id) => {
                info!(apply_id = id, vacancy_id, candidate_id, "Candidate applied");
                Ok(id)
            }
            Err(e) if Error::is_unique_violation(&e) => {
                warn!(vacancy_id, candidate_id, "Concurrent duplicate application rejected");
                Err(Error::conflict(ALREADY_APPLIED, code(1)))
            }
            Err(e) => Err(Error::storage(
                "failed to apply to the vacancy",
                ErrorCode::database(ErrorDomain::Application, 1),
            )(e)),
        }
    }

    /// Applications to a vacancy with each candidate's profile, address and
    /// disabilities.
    pub async fn list_by_vacancy(&self, vacancy_id: i32) -> Result<Vec<ApplicationDetail>> {
        let mut conn = self.pool.acquire().await?;

        let applies = application_repo::list_by_vacancy(&mut conn, vacancy_id).await?;
        let mut details = Vec::with_capacity(applies.len());
        for apply in applies {
            let person = person_service::find_by_id(&mut conn, apply.candidate_id)
                .await?
                .ok_or_else(|| {
                    Error::Internal(format!(
                        "application {} references missing person {}",
                        apply.id, apply.candidate_id
                    ))
                })?;
            let email = person_service::find_email(&mut conn, person.id).await?;
            let address = person_service::find_address(&mut conn, person.address_id).await?;
            let disabilities = disability_repo::list_by_person(&mut conn, person.id).await?;

            details.push(ApplicationDetail {
                id: apply.id,
                candidate: CandidateProfile::new(person, email, address, disabilities),
                status: apply.status,
            });
        }
        Ok(details)
    }

    /// Moves an application to `status`. Any status may follow any other.
    pub async fn update_status(&self, apply_id: i32, status: ApplyStatus) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        let updated = application_repo::update_status(&mut conn, apply_id, status).await?;
        if updated == 0 {
            return Err(Error::NotFound("vacancy apply not found".to_string()));
        }
        info!(apply_id, status = ?status, "Application status updated");
        Ok(())
    }
}
