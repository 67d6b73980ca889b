use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catalog entry for a ready-made software product
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SoftwareProduct {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub show_price: bool,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Child gallery image keyed by product id
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SoftwareImage {
    pub id: i64,
    pub software_id: i64,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub show_price: bool,
    pub image_url: String,
}

/// Public catalog card; the price is withheld unless the product opts in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub image_url: String,
}

impl From<SoftwareProduct> for SoftwareCard {
    fn from(product: SoftwareProduct) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.show_price.then_some(product.price),
            image_url: product.image_url,
        }
    }
}

/// Product detail with its gallery rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareDetail {
    #[serde(flatten)]
    pub card: SoftwareCard,
    pub gallery: Vec<SoftwareImage>,
}
