use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[sqlx(type_name = "contract_type", rename_all = "lowercase")]
pub enum ContractType {
    Clt,
    Pj,
    Trainee,
}

impl TryFrom<String> for ContractType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "clt" => Ok(ContractType::Clt),
            "pj" => Ok(ContractType::Pj),
            "trainee" => Ok(ContractType::Trainee),
            _ => Err("invalid contract type. valid values are: 'clt', 'pj', 'trainee'".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[sqlx(type_name = "requirement_type", rename_all = "lowercase")]
pub enum RequirementType {
    Desirable,
    Obligatory,
}

impl TryFrom<String> for RequirementType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "desirable" => Ok(RequirementType::Desirable),
            "obligatory" => Ok(RequirementType::Obligatory),
            _ => Err(
                "invalid requirement type. valid values are: 'desirable', 'obligatory'".to_string(),
            ),
        }
    }
}

/// A vacancy row joined with the owning company's name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vacancy {
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
    pub company_name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancySkill {
    pub id: i32,
    pub vacancy_id: i32,
    pub skill: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyRequirement {
    pub id: i32,
    pub vacancy_id: i32,
    pub requirement: String,
    pub requirement_type: RequirementType,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyResponsibility {
    pub id: i32,
    pub vacancy_id: i32,
    pub responsibility: String,
}

/// Disability tag on a vacancy, carrying the tagged vacancy id so listings can
/// load tags for a whole page in one query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyDisabilityTag {
    pub vacancy_id: i32,
    pub id: i32,
    pub category: crate::models::disability::DisabilityCategory,
    pub description: String,
    pub rate: i32,
}
