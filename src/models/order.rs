use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Triage status shared by software orders and trial requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    Contacted,
    Completed,
    Rejected,
}

impl OrderStatus {
    /// Single linear next step; `None` at the terminal states.
    /// `Rejected` is reachable only through the explicit reject action.
    pub fn advance(self) -> Option<Self> {
        match self {
            Self::New => Some(Self::Contacted),
            Self::Contacted => Some(Self::Completed),
            Self::Completed | Self::Rejected => None,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::New
    }
}

/// Purchase order for a catalog product
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SoftwareOrder {
    pub id: i64,
    pub software_id: i64,
    pub company_name: String,
    pub whatsapp: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareOrderForm {
    pub software_id: i64,
    pub company_name: String,
    pub whatsapp: String,
}
