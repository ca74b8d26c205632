use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

/// Review status of an application.
///
/// `Applied` is the only initial state. Reviewers may move an application
/// between any two statuses; there is no enforced terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "apply_status", rename_all = "lowercase")]
pub enum ApplyStatus {
    Applied,
    Approved,
    Rejected,
}

impl FromStr for ApplyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applied" => Ok(ApplyStatus::Applied),
            "approved" => Ok(ApplyStatus::Approved),
            "rejected" => Ok(ApplyStatus::Rejected),
            _ => Err(
                "invalid status. valid values are: 'applied', 'approved', 'rejected'".to_string(),
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyApply {
    pub id: i32,
    pub vacancy_id: i32,
    pub candidate_id: i32,
    pub status: ApplyStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
