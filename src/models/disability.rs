use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Fixed taxonomy shared by candidate profiles and vacancy accessibility tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "disability_category", rename_all = "lowercase")]
pub enum DisabilityCategory {
    Visual,
    Hearing,
    Physical,
    Intellectual,
    Psychosocial,
}

impl DisabilityCategory {
    pub const ALL: [DisabilityCategory; 5] = [
        DisabilityCategory::Visual,
        DisabilityCategory::Hearing,
        DisabilityCategory::Physical,
        DisabilityCategory::Intellectual,
        DisabilityCategory::Psychosocial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisabilityCategory::Visual => "visual",
            DisabilityCategory::Hearing => "hearing",
            DisabilityCategory::Physical => "physical",
            DisabilityCategory::Intellectual => "intellectual",
            DisabilityCategory::Psychosocial => "psychosocial",
        }
    }
}

impl fmt::Display for DisabilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Disability {
    pub id: i32,
    pub category: DisabilityCategory,
    pub description: String,
    pub rate: i32,
}

/// A disability as attached to a person, with whether it was acquired.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonDisability {
    pub id: i32,
    pub category: DisabilityCategory,
    pub description: String,
    pub rate: i32,
    pub acquired: bool,
}
