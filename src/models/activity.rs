use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Audit record written on notable actions; never updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub activity_type: String,
    pub description: String,
    pub actor: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewActivity {
    pub activity_type: String,
    pub description: String,
    pub actor: String,
}

impl NewActivity {
    pub fn login(email: &str) -> Self {
        Self {
            activity_type: "login".to_string(),
            description: format!("User {} logged in", email),
            actor: email.to_string(),
        }
    }
}
