use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Contact details shown in the site footer and contact page. Single row, id 1.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactInfo {
    pub id: i64,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub working_hours: String,
    pub working_days: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfoDraft {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub working_hours: String,
    pub working_days: String,
}

/// A single statistic on the about page ("50+ مشروع منجز" and the like)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// About-page content. The stats and team_members sub-fields are stored as
/// JSON text and validated once at the store boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub vision: String,
    pub mission: String,
    pub stats: Vec<Stat>,
    pub team_members: Vec<TeamMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutDraft {
    pub title: String,
    pub subtitle: String,
    pub vision: String,
    pub mission: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
}

/// Site-wide settings singleton, id 1
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GeneralSettings {
    pub id: i64,
    pub site_title: String,
    pub favicon_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettingsDraft {
    pub site_title: String,
    pub favicon_url: String,
}
