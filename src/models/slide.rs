use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Hero carousel slide, ordered by id on the homepage
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Slide {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or editing a slide
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideDraft {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub description: String,
    pub image_url: String,
}

/// Built-in slides served when the database cannot be reached
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide {
            id: 1,
            title: "حلول برمجية متكاملة".to_string(),
            subtitle: Some("وصال للتقنية".to_string()),
            description: "نبني أنظمة وتطبيقات تلبي احتياجات أعمالك".to_string(),
            image_url: "/uploads/defaults/hero-1.webp".to_string(),
            created_at: Utc::now(),
        },
        Slide {
            id: 2,
            title: "أنظمة إدارة جاهزة".to_string(),
            subtitle: None,
            description: "برمجيات جاهزة للمحاسبة والمبيعات وإدارة المنشآت".to_string(),
            image_url: "/uploads/defaults/hero-2.webp".to_string(),
            created_at: Utc::now(),
        },
    ]
}
