use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::order::OrderStatus;

/// Request to try the software before purchase
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrialRequest {
    pub id: i64,
    pub company_name: String,
    pub whatsapp: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialRequestForm {
    pub company_name: String,
    pub whatsapp: String,
}
