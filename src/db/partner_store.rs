use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::partner::{FALLBACK_PARTNER_NAME, Partner, PartnerDraft, fallback_partner},
};

/// Store for partner logos shown in the partners carousel
#[derive(Clone)]
pub struct PartnerStore {
    pool: DbPool,
}

impl PartnerStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Raw partner rows, admin view
    pub async fn all(&self) -> Result<Vec<Partner>> {
        let partners = sqlx::query_as::<_, Partner>("SELECT * FROM partners ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(partners)
    }

    /// Public list: the Wisal partner is merged in exactly once, whether or
    /// not the table carries it.
    pub async fn all_with_fallback(&self) -> Result<Vec<Partner>> {
        let partners = self.all().await?;
        Ok(merge_fallback(partners))
    }

    pub async fn get(&self, id: i64) -> Result<Partner> {
        sqlx::query_as::<_, Partner>("SELECT * FROM partners WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn create(&self, draft: PartnerDraft) -> Result<Partner> {
        let result = sqlx::query("INSERT INTO partners (name, logo_url) VALUES (?, ?)")
            .bind(&draft.name)
            .bind(&draft.logo_url)
            .execute(&self.pool)
            .await?;

        self.get(result.last_insert_rowid()).await
    }

    pub async fn update(&self, id: i64, draft: PartnerDraft) -> Result<Partner> {
        let result = sqlx::query("UPDATE partners SET name = ?, logo_url = ? WHERE id = ?")
            .bind(&draft.name)
            .bind(&draft.logo_url)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM partners WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

/// Deduplicating merge of the hard-coded Wisal partner
pub fn merge_fallback(mut partners: Vec<Partner>) -> Vec<Partner> {
    let mut seen = false;
    partners.retain(|p| {
        if p.name == FALLBACK_PARTNER_NAME {
            let keep = !seen;
            seen = true;
            keep
        } else {
            true
        }
    });

    if !seen {
        partners.push(fallback_partner());
    }

    partners
}
