use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::{
        order::OrderStatus,
        trial::{TrialRequest, TrialRequestForm},
    },
};

/// Store for trial requests; shares the order status sequence
#[derive(Clone)]
pub struct TrialStore {
    pool: DbPool,
}

impl TrialStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, form: TrialRequestForm) -> Result<TrialRequest> {
        let result =
            sqlx::query("INSERT INTO trial_requests (company_name, whatsapp) VALUES (?, ?)")
                .bind(&form.company_name)
                .bind(&form.whatsapp)
                .execute(&self.pool)
                .await?;

        self.get(result.last_insert_rowid()).await
    }

    pub async fn get(&self, id: i64) -> Result<TrialRequest> {
        sqlx::query_as::<_, TrialRequest>("SELECT * FROM trial_requests WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn list(&self, status: Option<OrderStatus>) -> Result<Vec<TrialRequest>> {
        let trials = match status {
            Some(status) => {
                sqlx::query_as::<_, TrialRequest>(
                    "SELECT * FROM trial_requests WHERE status = ? ORDER BY id DESC",
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, TrialRequest>("SELECT * FROM trial_requests ORDER BY id DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(trials)
    }

    pub async fn advance(&self, id: i64) -> Result<TrialRequest> {
        let trial = self.get(id).await?;
        let next = trial
            .status
            .advance()
            .ok_or_else(|| AppError::BadRequest("لا يمكن تغيير حالة هذا الطلب".to_string()))?;

        self.set_status(id, next).await
    }

    pub async fn reject(&self, id: i64) -> Result<TrialRequest> {
        self.get(id).await?;
        self.set_status(id, OrderStatus::Rejected).await
    }

    async fn set_status(&self, id: i64, status: OrderStatus) -> Result<TrialRequest> {
        sqlx::query("UPDATE trial_requests SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM trial_requests WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
