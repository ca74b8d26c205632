use serde::{Deserialize, Serialize};

use crate::models::application::ApplyStatus;
use crate::models::disability::PersonDisability;
use crate::models::person::{Address, Person};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyRequest {
    pub candidate_id: i32,
    pub vacancy_id: i32,
}

/// `?status=` of the status patch. Kept as text so an unknown value can be
/// answered with the list of valid statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curriculum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub disabilities: Vec<PersonDisability>,
}

impl CandidateProfile {
    pub fn new(
        person: Person,
        email: String,
        address: Option<Address>,
        disabilities: Vec<PersonDisability>,
    ) -> Self {
        Self {
            id: person.id,
            name: person.name,
            email,
            phone: person.phone,
            gender: person.gender,
            curriculum: person.curriculum,
            address,
            disabilities,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDetail {
    pub id: i32,
    pub candidate: CandidateProfile,
    pub status: ApplyStatus,
}
