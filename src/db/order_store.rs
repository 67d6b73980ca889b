use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::order::{OrderStatus, SoftwareOrder, SoftwareOrderForm},
};

/// Store for purchase orders submitted from the catalog
#[derive(Clone)]
pub struct OrderStore {
    pool: DbPool,
}

impl OrderStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new order; every order starts in status `new`
    pub async fn create(&self, form: SoftwareOrderForm) -> Result<SoftwareOrder> {
        let result = sqlx::query(
            "INSERT INTO software_orders (software_id, company_name, whatsapp) VALUES (?, ?, ?)",
        )
        .bind(form.software_id)
        .bind(&form.company_name)
        .bind(&form.whatsapp)
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_rowid()).await
    }

    pub async fn get(&self, id: i64) -> Result<SoftwareOrder> {
        sqlx::query_as::<_, SoftwareOrder>("SELECT * FROM software_orders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Newest first, optionally filtered to one triage tab
    pub async fn list(&self, status: Option<OrderStatus>) -> Result<Vec<SoftwareOrder>> {
        let orders = match status {
            Some(status) => {
                sqlx::query_as::<_, SoftwareOrder>(
                    "SELECT * FROM software_orders WHERE status = ? ORDER BY id DESC",
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, SoftwareOrder>("SELECT * FROM software_orders ORDER BY id DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(orders)
    }

    /// Move the order one step along new -> contacted -> completed
    pub async fn advance(&self, id: i64) -> Result<SoftwareOrder> {
        let order = self.get(id).await?;
        let next = order
            .status
            .advance()
            .ok_or_else(|| AppError::BadRequest("لا يمكن تغيير حالة هذا الطلب".to_string()))?;

        self.set_status(id, next).await
    }

    pub async fn reject(&self, id: i64) -> Result<SoftwareOrder> {
        self.get(id).await?;
        self.set_status(id, OrderStatus::Rejected).await
    }

    async fn set_status(&self, id: i64, status: OrderStatus) -> Result<SoftwareOrder> {
        sqlx::query("UPDATE software_orders SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM software_orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
