use sqlx::FromRow;

use crate::{
    db::DbPool,
    error::Result,
    models::site::{
        AboutContent, AboutDraft, ContactInfo, ContactInfoDraft, GeneralSettings,
        GeneralSettingsDraft,
    },
};

/// Raw about_content row; the JSON sub-fields are decoded here and nowhere else
#[derive(FromRow)]
struct AboutRow {
    id: i64,
    title: String,
    subtitle: String,
    vision: String,
    mission: String,
    stats: String,
    team_members: String,
}

/// Store for the three singleton content rows (contact info, about, settings).
/// All of them are pinned to id 1.
#[derive(Clone)]
pub struct SiteStore {
    pool: DbPool,
}

impl SiteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn contact_info(&self) -> Result<ContactInfo> {
        let info = sqlx::query_as::<_, ContactInfo>("SELECT * FROM contact_info WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(info)
    }

    pub async fn update_contact_info(&self, draft: ContactInfoDraft) -> Result<ContactInfo> {
        sqlx::query(
            r#"
            INSERT INTO contact_info (id, email, phone, location, working_hours, working_days)
            VALUES (1, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                email = excluded.email,
                phone = excluded.phone,
                location = excluded.location,
                working_hours = excluded.working_hours,
                working_days = excluded.working_days
            "#,
        )
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.location)
        .bind(&draft.working_hours)
        .bind(&draft.working_days)
        .execute(&self.pool)
        .await?;

        self.contact_info().await
    }

    pub async fn about(&self) -> Result<AboutContent> {
        let row = sqlx::query_as::<_, AboutRow>("SELECT * FROM about_content WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(AboutContent {
            id: row.id,
            title: row.title,
            subtitle: row.subtitle,
            vision: row.vision,
            mission: row.mission,
            stats: decode_or_empty(&row.stats, "stats"),
            team_members: decode_or_empty(&row.team_members, "team_members"),
        })
    }

    pub async fn update_about(&self, draft: AboutDraft) -> Result<AboutContent> {
        let stats = serde_json::to_string(&draft.stats)?;
        let team_members = serde_json::to_string(&draft.team_members)?;

        sqlx::query(
            r#"
            INSERT INTO about_content (id, title, subtitle, vision, mission, stats, team_members)
            VALUES (1, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                subtitle = excluded.subtitle,
                vision = excluded.vision,
                mission = excluded.mission,
                stats = excluded.stats,
                team_members = excluded.team_members
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.subtitle)
        .bind(&draft.vision)
        .bind(&draft.mission)
        .bind(&stats)
        .bind(&team_members)
        .execute(&self.pool)
        .await?;

        self.about().await
    }

    pub async fn settings(&self) -> Result<GeneralSettings> {
        let settings =
            sqlx::query_as::<_, GeneralSettings>("SELECT * FROM general_settings WHERE id = 1")
                .fetch_one(&self.pool)
                .await?;

        Ok(settings)
    }

    pub async fn update_settings(&self, draft: GeneralSettingsDraft) -> Result<GeneralSettings> {
        sqlx::query(
            r#"
            INSERT INTO general_settings (id, site_title, favicon_url)
            VALUES (1, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                site_title = excluded.site_title,
                favicon_url = excluded.favicon_url
            "#,
        )
        .bind(&draft.site_title)
        .bind(&draft.favicon_url)
        .execute(&self.pool)
        .await?;

        self.settings().await
    }
}

/// A malformed stored sub-field degrades to an empty list instead of failing
/// the whole read; writes always go through the typed drafts.
fn decode_or_empty<T: serde::de::DeserializeOwned>(raw: &str, field: &str) -> Vec<T> {
    match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(field, %e, "discarding malformed about_content sub-field");
            Vec::new()
        }
    }
}
