use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::company::Company;
use crate::models::person::{Address, Person};
use crate::models::role::Role;
use crate::models::user::User;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Credentials {
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i32,
    pub email: String,
    pub role: Role,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserInfo,
}

/// Profile returned by `POST /get-user-data`, shaped by the account's role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum UserProfile {
    Company {
        user: UserInfo,
        company: Company,
        #[serde(skip_serializing_if = "Option::is_none")]
        address: Option<Address>,
    },
    Person {
        user: UserInfo,
        person: Person,
        #[serde(skip_serializing_if = "Option::is_none")]
        address: Option<Address>,
    },
    Admin {
        user: UserInfo,
    },
}
