use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Name of the partner that must always appear in the public list
pub const FALLBACK_PARTNER_NAME: &str = "Wisal";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    pub logo_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerDraft {
    pub name: String,
    pub logo_url: String,
}

/// Synthetic row merged in when the backend list lacks the Wisal partner.
/// id 0 never collides with an AUTOINCREMENT key.
pub fn fallback_partner() -> Partner {
    Partner {
        id: 0,
        name: FALLBACK_PARTNER_NAME.to_string(),
        logo_url: "/uploads/defaults/wisal-logo.webp".to_string(),
        created_at: Utc::now(),
    }
}
