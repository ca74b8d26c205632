use serde::Deserialize;
use validator::Validate;

use crate::models::disability::DisabilityCategory;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DisabilityRequest {
    pub category: DisabilityCategory,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(range(min = 0, max = 100, message = "rate must be between 0 and 100"))]
    pub rate: i32,
}
