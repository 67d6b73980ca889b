use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::admin::{AdminUser, Session},
};

/// Store for admin accounts and their server-side sessions
#[derive(Clone)]
pub struct AdminStore {
    pool: DbPool,
}

impl AdminStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn all(&self) -> Result<Vec<AdminUser>> {
        let admins = sqlx::query_as::<_, AdminUser>("SELECT * FROM admin_users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(admins)
    }

    pub async fn get(&self, id: i64) -> Result<AdminUser> {
        sqlx::query_as::<_, AdminUser>("SELECT * FROM admin_users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<AdminUser>> {
        let admin = sqlx::query_as::<_, AdminUser>("SELECT * FROM admin_users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(admin)
    }

    /// Create an admin account; usernames are unique
    pub async fn create(&self, username: &str, password_hash: &str) -> Result<AdminUser> {
        if self.get_by_username(username).await?.is_some() {
            return Err(AppError::BadRequest(
                "اسم المستخدم مستخدم بالفعل".to_string(),
            ));
        }

        let result =
            sqlx::query("INSERT INTO admin_users (username, password_hash) VALUES (?, ?)")
                .bind(username)
                .bind(password_hash)
                .execute(&self.pool)
                .await?;

        self.get(result.last_insert_rowid()).await
    }

    pub async fn update_password(&self, id: i64, password_hash: &str) -> Result<()> {
        let result = sqlx::query("UPDATE admin_users SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    /// Delete an admin; their sessions go with them via the FK cascade
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM admin_users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    /// Open a session for an admin, returning the bearer token
    pub async fn create_session(&self, admin_id: i64, ttl_hours: i64) -> Result<Session> {
        let token = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + Duration::hours(ttl_hours);

        sqlx::query("INSERT INTO admin_sessions (token, admin_id, expires_at) VALUES (?, ?, ?)")
            .bind(&token)
            .bind(admin_id)
            .bind(expires_at)
            .execute(&self.pool)
            .await?;

        Ok(Session {
            token,
            admin_id,
            expires_at,
        })
    }

    /// Resolve a live session; expired rows are dropped on the way out
    pub async fn get_session(&self, token: &str) -> Result<Option<Session>> {
        let session =
            sqlx::query_as::<_, Session>("SELECT * FROM admin_sessions WHERE token = ?")
                .bind(token)
                .fetch_optional(&self.pool)
                .await?;

        match session {
            Some(session) if session.expires_at <= Utc::now() => {
                self.delete_session(token).await?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    pub async fn delete_session(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM admin_sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
