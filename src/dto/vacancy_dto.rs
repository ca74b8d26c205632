use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::disability::Disability;
use crate::models::vacancy::{
    ContractType, RequirementType, Vacancy, VacancyDisabilityTag, VacancyRequirement,
};

/// Full vacancy aggregate as submitted on create and on update (full replace).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VacancyRequest {
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "department is required"))]
    pub department: String,
    #[validate(length(min = 1, message = "section is required"))]
    pub section: String,
    #[serde(alias = "turn")]
    #[validate(length(min = 1, message = "shift is required"))]
    pub shift: String,
    pub publish_date: NaiveDate,
    pub registration_date: NaiveDate,
    #[validate(length(min = 1, message = "area is required"))]
    pub area: String,
    #[validate(range(min = 1, message = "company ID is required"))]
    pub company_id: i32,
    pub contract_type: ContractType,
    #[validate(length(min = 1, message = "at least one disability is required"))]
    pub disabilities: Vec<i32>,
    #[validate(length(min = 1, message = "at least one skill is required"))]
    pub skills: Vec<String>,
    #[serde(alias = "responsabilities")]
    #[validate(length(min = 1, message = "at least one responsibility is required"))]
    pub responsibilities: Vec<String>,
    #[validate(length(min = 1, message = "at least one requirement is required"), nested)]
    pub requirements: Vec<RequirementRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequirementRequest {
    #[validate(length(min = 1, message = "requirement description is required"))]
    pub requirement: String,
    #[serde(rename = "type")]
    pub requirement_type: RequirementType,
}

/// Query string of `GET /vacancies`. `page` is zero-based and `per_page` is
/// capped at [`VacancyListQuery::MAX_PER_PAGE`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VacancyListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub company_id: Option<i32>,
    pub disability: Option<i32>,
    pub candidate_id: Option<i32>,
    pub area: Option<String>,
    pub contract_type: Option<ContractType>,
    pub search_text: Option<String>,
}

impl VacancyListQuery {
    pub const DEFAULT_PER_PAGE: i64 = 10;
    pub const MAX_PER_PAGE: i64 = 100;

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0).max(0)
    }

    pub fn per_page(&self) -> i64 {
        match self.per_page {
            Some(n) if n > 0 => n.min(Self::MAX_PER_PAGE),
            _ => Self::DEFAULT_PER_PAGE,
        }
    }

    pub fn offset(&self) -> Result<i64> {
        self.page()
            .checked_mul(self.per_page())
            .ok_or_else(|| Error::BadRequest("page is out of range".to_string()))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VacancyDetailQuery {
    pub candidate_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementResponse {
    pub requirement: String,
    #[serde(rename = "type")]
    pub requirement_type: RequirementType,
}

impl From<VacancyRequirement> for RequirementResponse {
    fn from(r: VacancyRequirement) -> Self {
        Self {
            requirement: r.requirement,
            requirement_type: r.requirement_type,
        }
    }
}

impl From<VacancyDisabilityTag> for Disability {
    fn from(tag: VacancyDisabilityTag) -> Self {
        Self {
            id: tag.id,
            category: tag.category,
            description: tag.description,
            rate: tag.rate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyDetail {
    pub id: i32,
    pub code: String,
    pub title: String,
    pub description: String,
    pub department: String,
    pub section: String,
    pub shift: String,
    pub publish_date: NaiveDate,
    pub registration_date: NaiveDate,
    pub area: String,
    pub contract_type: ContractType,
    pub company_id: i32,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_already_applied: Option<bool>,
    pub disabilities: Vec<Disability>,
    pub skills: Vec<String>,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<RequirementResponse>,
}

impl VacancyDetail {
    pub fn new(vacancy: Vacancy, disabilities: Vec<Disability>) -> Self {
        Self {
            id: vacancy.id,
            code: vacancy.code,
            title: vacancy.title,
            description: vacancy.description,
            department: vacancy.department,
            section: vacancy.section,
            shift: vacancy.shift,
            publish_date: vacancy.publish_date,
            registration_date: vacancy.registration_date,
            area: vacancy.area,
            contract_type: vacancy.contract_type,
            company_id: vacancy.company_id,
            company: vacancy.company_name,
            candidate_already_applied: None,
            disabilities,
            skills: Vec::new(),
            responsibilities: Vec::new(),
            requirements: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancySummary {
    pub id: i32,
    pub code: String,
    pub title: String,
    pub area: String,
    pub company: String,
    pub contract_type: ContractType,
    pub disabilities: Vec<Disability>,
}

impl VacancySummary {
    pub fn new(vacancy: Vacancy, disabilities: Vec<Disability>) -> Self {
        Self {
            id: vacancy.id,
            code: vacancy.code,
            title: vacancy.title,
            area: vacancy.area,
            company: vacancy.company_name,
            contract_type: vacancy.contract_type,
            disabilities,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedVacancy {
    pub id: i32,
}
