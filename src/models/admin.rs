use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database admin account. Only the argon2 hash is ever stored.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// JSON representation of an admin for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserDto {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<AdminUser> for AdminUserDto {
    fn from(admin: AdminUser) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
            created_at: admin.created_at,
        }
    }
}

/// Server-side session row backing a bearer token
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub token: String,
    pub admin_id: i64,
    pub expires_at: DateTime<Utc>,
}

/// Claims carried by the signed fallback token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackClaims {
    pub sub: i64,
    pub username: String,
    pub exp: usize,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub fallback_token: String,
    pub admin: AdminUserDto,
}

/// Resolved caller identity attached to guarded requests.
/// `degraded` marks access granted by the fallback token alone.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub admin: AdminUserDto,
    pub degraded: bool,
}

/// Tri-state session check result for `GET /api/auth/session`
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionInfo {
    pub authenticated: bool,
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminUserDto>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAdminRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePasswordRequest {
    pub password: String,
}
