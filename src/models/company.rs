use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub cnpj: String,
    pub phone: String,
    pub user_id: i32,
    pub address_id: Option<i32>,
}
