use sqlx::{PgConnection, PgPool};
use std::collections::{HashMap, HashSet};
use tracing::info;

use crate::database::UnitOfWork;
use crate::dto::vacancy_dto::{
    RequirementResponse, VacancyDetail, VacancyListQuery, VacancyRequest, VacancySummary,
};
use crate::error::{Error, ErrorCode, ErrorDomain, Result};
use crate::models::disability::Disability;
use crate::repositories::{application_repo, vacancy_children_repo, vacancy_repo};
use crate::services::company_service;

const fn code(sequence: u8) -> ErrorCode {
    ErrorCode::service(ErrorDomain::Vacancy, sequence)
}

/// Transactional store for the vacancy aggregate: the vacancy row plus its
/// skills, requirements, responsibilities and disability tags.
#[derive(Clone)]
pub struct VacancyService {
    pool: PgPool,
}

impl VacancyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Writes the vacancy and all of its children in one transaction.
    pub async fn create(&self, req: &VacancyRequest) -> Result<i32> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        ensure_company(uow.conn(), req.company_id).await?;

        let id = async {
            let id = vacancy_repo::insert(uow.conn(), req).await?;
            insert_children(uow.conn(), id, req).await?;
            Ok::<_, Error>(id)
        }
        .await
        .map_err(|e| Error::failed("failed to create the vacancy", code(1), e))?;

        uow.commit()
            .await
            .map_err(|e| Error::failed("failed to create the vacancy", code(1), e))?;

        info!(vacancy_id = id, company_id = req.company_id, "Vacancy created");
        Ok(id)
    }

    /// Replaces the vacancy row and every child collection.
    pub async fn update(&self, id: i32, req: &VacancyRequest) -> Result<()> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        if !vacancy_repo::exists(uow.conn(), id).await? {
            return Err(Error::NotFound("vacancy not found".to_string()));
        }
        ensure_company(uow.conn(), req.company_id).await?;

        async {
            vacancy_repo::update(uow.conn(), id, req).await?;
            delete_children(uow.conn(), id).await?;
            insert_children(uow.conn(), id, req).await
        }
        .await
        .map_err(|e| Error::failed("failed to update the vacancy", code(2), e))?;

        uow.commit()
            .await
            .map_err(|e| Error::failed("failed to update the vacancy", code(2), e))?;

        info!(vacancy_id = id, "Vacancy updated");
        Ok(())
    }

    /// Removes the vacancy together with its children and applications.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        if !vacancy_repo::exists(uow.conn(), id).await? {
            return Err(Error::NotFound("vacancy not found".to_string()));
        }

        async {
            delete_children(uow.conn(), id).await?;
            application_repo::delete_by_vacancy(uow.conn(), id).await?;
            vacancy_repo::delete(uow.conn(), id).await?;
            Ok::<_, Error>(())
        }
        .await
        .map_err(|e| Error::failed("failed to delete the vacancy", code(3), e))?;

        uow.commit()
            .await
            .map_err(|e| Error::failed("failed to delete the vacancy", code(3), e))?;

        info!(vacancy_id = id, "Vacancy deleted");
        Ok(())
    }

    pub async fn get(&self, id: i32, candidate_id: Option<i32>) -> Result<VacancyDetail> {
        let mut conn = self.pool.acquire().await?;

        let vacancy = vacancy_repo::find_by_id(&mut conn, id)
            .await
            .map_err(|e| match e {
                Error::NotFound(_) => Error::NotFound("vacancy not found".to_string()),
                other => other,
            })?;
        let disabilities = vacancy_children_repo::list_disabilities(&mut conn, &[id])
            .await?
            .into_iter()
            .map(Disability::from)
            .collect();

        let mut detail = VacancyDetail::new(vacancy, disabilities);
        detail.skills = vacancy_children_repo::list_skills(&mut conn, id)
            .await?
            .into_iter()
            .map(|s| s.skill)
            .collect();
        detail.requirements = vacancy_children_repo::list_requirements(&mut conn, id)
            .await?
            .into_iter()
            .map(RequirementResponse::from)
            .collect();
        detail.responsibilities = vacancy_children_repo::list_responsibilities(&mut conn, id)
            .await?
            .into_iter()
            .map(|r| r.responsibility)
            .collect();

        if let Some(candidate_id) = candidate_id.filter(|c| *c > 0) {
            detail.candidate_already_applied = Some(
                application_repo::exists_for_candidate(&mut conn, id, candidate_id).await?,
            );
        }

        Ok(detail)
    }

    /// One page of vacancy summaries.
    ///
    /// The disability and candidate filters run after the page is fetched, so
    /// a filtered page may hold fewer than `per_page` items even when later
    /// pages still have matches.
    pub async fn list(&self, query: &VacancyListQuery) -> Result<Vec<VacancySummary>> {
        let offset = query.offset()?;
        let mut conn = self.pool.acquire().await?;

        let vacancies = vacancy_repo::list(&mut conn, query, offset).await?;
        if vacancies.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i32> = vacancies.iter().map(|v| v.id).collect();

        let mut tags: HashMap<i32, Vec<Disability>> = HashMap::new();
        for tag in vacancy_children_repo::list_disabilities(&mut conn, &ids).await? {
            tags.entry(tag.vacancy_id).or_default().push(Disability::from(tag));
        }

        let applied: Option<HashSet<i32>> = match query.candidate_id.filter(|c| *c > 0) {
            Some(candidate_id) => Some(
                application_repo::applied_vacancy_ids(&mut conn, candidate_id, &ids)
                    .await?
                    .into_iter()
                    .collect(),
            ),
            None => None,
        };

        let disability = query.disability.filter(|d| *d > 0);
        let per_page = query.per_page() as usize;

        let summaries = vacancies
            .into_iter()
            .map(|vacancy| {
                let disabilities = tags.remove(&vacancy.id).unwrap_or_default();
                VacancySummary::new(vacancy, disabilities)
            })
            .filter(|summary| {
                disability.map_or(true, |wanted| {
                    summary.disabilities.iter().any(|d| d.id == wanted)
                })
            })
            .filter(|summary| applied.as_ref().map_or(true, |set| set.contains(&summary.id)))
            .take(per_page)
            .collect();

        Ok(summaries)
    }
}

async fn ensure_company(conn: &mut PgConnection, company_id: i32) -> Result<()> {
    if company_service::exists(conn, company_id).await? {
        Ok(())
    } else {
        Err(Error::BadRequest("company not found".to_string()))
    }
}

async fn insert_children(conn: &mut PgConnection, id: i32, req: &VacancyRequest) -> Result<()> {
    for skill in &req.skills {
        vacancy_children_repo::insert_skill(conn, id, skill).await?;
    }
    for requirement in &req.requirements {
        vacancy_children_repo::insert_requirement(conn, id, requirement).await?;
    }
    for responsibility in &req.responsibilities {
        vacancy_children_repo::insert_responsibility(conn, id, responsibility).await?;
    }
    for disability_id in &req.disabilities {
        vacancy_children_repo::upsert_disability(conn, id, *disability_id).await?;
    }
    Ok(())
}

async fn delete_children(conn: &mut PgConnection, id: i32) -> Result<()> {
    vacancy_children_repo::delete_skills(conn, id).await?;
    vacancy_children_repo::delete_requirements(conn, id).await?;
    vacancy_children_repo::delete_responsibilities(conn, id).await?;
    vacancy_children_repo::delete_disabilities(conn, id).await
}
