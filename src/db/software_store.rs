use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::software::{SoftwareDraft, SoftwareImage, SoftwareProduct},
};

/// Store for catalog products and their gallery images
#[derive(Clone)]
pub struct SoftwareStore {
    pool: DbPool,
}

impl SoftwareStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn all(&self) -> Result<Vec<SoftwareProduct>> {
        let products =
            sqlx::query_as::<_, SoftwareProduct>("SELECT * FROM software_products ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(products)
    }

    pub async fn get(&self, id: i64) -> Result<SoftwareProduct> {
        sqlx::query_as::<_, SoftwareProduct>("SELECT * FROM software_products WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn create(&self, draft: SoftwareDraft) -> Result<SoftwareProduct> {
        let result = sqlx::query(
            r#"
            INSERT INTO software_products (title, description, price, show_price, image_url)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(draft.show_price)
        .bind(&draft.image_url)
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_rowid()).await
    }

    pub async fn update(&self, id: i64, draft: SoftwareDraft) -> Result<SoftwareProduct> {
        let result = sqlx::query(
            r#"
            UPDATE software_products
            SET title = ?, description = ?, price = ?, show_price = ?, image_url = ?
            WHERE id = ?
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(draft.show_price)
        .bind(&draft.image_url)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        self.get(id).await
    }

    /// Delete a product; gallery rows go with it via the FK cascade
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM software_products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    pub async fn gallery(&self, software_id: i64) -> Result<Vec<SoftwareImage>> {
        let images = sqlx::query_as::<_, SoftwareImage>(
            "SELECT * FROM software_images WHERE software_id = ? ORDER BY id",
        )
        .bind(software_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(images)
    }

    pub async fn add_gallery_image(&self, software_id: i64, image_url: &str) -> Result<SoftwareImage> {
        // Make sure the parent exists before inserting a child row
        self.get(software_id).await?;

        let result =
            sqlx::query("INSERT INTO software_images (software_id, image_url) VALUES (?, ?)")
                .bind(software_id)
                .bind(image_url)
                .execute(&self.pool)
                .await?;

        let image = sqlx::query_as::<_, SoftwareImage>("SELECT * FROM software_images WHERE id = ?")
            .bind(result.last_insert_rowid())
            .fetch_one(&self.pool)
            .await?;

        Ok(image)
    }

    pub async fn remove_gallery_image(&self, image_id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM software_images WHERE id = ?")
            .bind(image_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
