use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::activity::NewActivity;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActivityRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
    pub activity_type: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "actor is required"))]
    pub actor: String,
}

impl From<CreateActivityRequest> for NewActivity {
    fn from(req: CreateActivityRequest) -> Self {
        Self {
            activity_type: req.activity_type,
            description: req.description,
            actor: req.actor,
        }
    }
}

/// Raw activity listing filter; dates are unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityQuery {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub start_date: i64,
    pub end_date: i64,
}
