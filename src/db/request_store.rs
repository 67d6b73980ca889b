use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::request::{ProjectRequest, ProjectRequestForm, RequestStatus},
};

/// Store for custom project requests
#[derive(Clone)]
pub struct RequestStore {
    pool: DbPool,
}

impl RequestStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, form: ProjectRequestForm) -> Result<ProjectRequest> {
        let result = sqlx::query(
            r#"
            INSERT INTO project_requests (name, email, phone, title, description)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&form.name)
        .bind(&form.email)
        .bind(&form.phone)
        .bind(&form.title)
        .bind(&form.description)
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_rowid()).await
    }

    pub async fn get(&self, id: i64) -> Result<ProjectRequest> {
        sqlx::query_as::<_, ProjectRequest>("SELECT * FROM project_requests WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn list(&self, status: Option<RequestStatus>) -> Result<Vec<ProjectRequest>> {
        let requests = match status {
            Some(status) => {
                sqlx::query_as::<_, ProjectRequest>(
                    "SELECT * FROM project_requests WHERE status = ? ORDER BY id DESC",
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ProjectRequest>(
                    "SELECT * FROM project_requests ORDER BY id DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(requests)
    }

    /// new -> contacted -> in_progress -> completed, one step at a time
    pub async fn advance(&self, id: i64) -> Result<ProjectRequest> {
        let request = self.get(id).await?;
        let next = request
            .status
            .advance()
            .ok_or_else(|| AppError::BadRequest("لا يمكن تغيير حالة هذا الطلب".to_string()))?;

        self.set_status(id, next).await
    }

    pub async fn reject(&self, id: i64) -> Result<ProjectRequest> {
        self.get(id).await?;
        self.set_status(id, RequestStatus::Rejected).await
    }

    async fn set_status(&self, id: i64, status: RequestStatus) -> Result<ProjectRequest> {
        sqlx::query("UPDATE project_requests SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM project_requests WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
