use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::slide::{Slide, SlideDraft},
};

/// Store for hero carousel slides
#[derive(Clone)]
pub struct SlideStore {
    pool: DbPool,
}

impl SlideStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All slides in carousel order
    pub async fn all(&self) -> Result<Vec<Slide>> {
        let slides = sqlx::query_as::<_, Slide>("SELECT * FROM slides ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(slides)
    }

    pub async fn get(&self, id: i64) -> Result<Slide> {
        sqlx::query_as::<_, Slide>("SELECT * FROM slides WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn create(&self, draft: SlideDraft) -> Result<Slide> {
        let result = sqlx::query(
            "INSERT INTO slides (title, subtitle, description, image_url) VALUES (?, ?, ?, ?)",
        )
        .bind(&draft.title)
        .bind(&draft.subtitle)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_rowid()).await
    }

    pub async fn update(&self, id: i64, draft: SlideDraft) -> Result<Slide> {
        let result = sqlx::query(
            "UPDATE slides SET title = ?, subtitle = ?, description = ?, image_url = ? WHERE id = ?",
        )
        .bind(&draft.title)
        .bind(&draft.subtitle)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM slides WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
