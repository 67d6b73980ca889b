use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Triage status for custom project requests; one extra in-progress step
/// compared to orders and trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum RequestStatus {
    New,
    Contacted,
    InProgress,
    Completed,
    Rejected,
}

impl RequestStatus {
    pub fn advance(self) -> Option<Self> {
        match self {
            Self::New => Some(Self::Contacted),
            Self::Contacted => Some(Self::InProgress),
            Self::InProgress => Some(Self::Completed),
            Self::Completed | Self::Rejected => None,
        }
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        Self::New
    }
}

/// Custom software project request submitted from the public site
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectRequest {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: String,
    pub description: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRequestForm {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub title: String,
    pub description: String,
}
