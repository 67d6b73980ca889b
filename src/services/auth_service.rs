use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{
    config::Config,
    db::{DbPool, admin_store::AdminStore},
    error::{AppError, Result},
    models::admin::{AdminIdentity, AdminUser, FallbackClaims, LoginResponse},
};

/// Hash a password with argon2. Plaintext never reaches the database.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    Ok(hash.to_string())
}

pub fn verify_password(hash: &str, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Session issue and verification for the admin dashboard. Access is granted
/// by a live database session, or by the signed fallback token alone as an
/// explicit degraded-trust mode.
#[derive(Clone)]
pub struct AuthService {
    store: AdminStore,
    secret: String,
    ttl_hours: i64,
}

impl AuthService {
    pub fn new(pool: DbPool, config: &Config) -> Self {
        Self {
            store: AdminStore::new(pool),
            secret: config.session_secret.clone(),
            ttl_hours: config.session_ttl_hours,
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let admin = self
            .store
            .get_by_username(username)
            .await?
            .ok_or_else(|| AppError::Auth("unknown username".to_string()))?;

        if !verify_password(&admin.password_hash, password) {
            return Err(AppError::Auth("wrong password".to_string()));
        }

        let session = self.store.create_session(admin.id, self.ttl_hours).await?;
        let fallback_token = self.issue_fallback_token(&admin)?;

        Ok(LoginResponse {
            token: session.token,
            fallback_token,
            admin: admin.into(),
        })
    }

    pub async fn logout(&self, token: &str) -> Result<()> {
        self.store.delete_session(token).await
    }

    fn issue_fallback_token(&self, admin: &AdminUser) -> Result<String> {
        let claims = FallbackClaims {
            sub: admin.id,
            username: admin.username.clone(),
            exp: (Utc::now() + Duration::hours(self.ttl_hours)).timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }

    fn decode_fallback_token(&self, token: &str) -> Option<FallbackClaims> {
        decode::<FallbackClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .ok()
    }

    /// Resolve the caller: live session first, then the fallback token.
    /// `None` means not logged in.
    pub async fn resolve(
        &self,
        session_token: Option<&str>,
        fallback_token: Option<&str>,
    ) -> Result<Option<AdminIdentity>> {
        if let Some(token) = session_token {
            if let Some(session) = self.store.get_session(token).await? {
                let admin = self.store.get(session.admin_id).await?;
                return Ok(Some(AdminIdentity {
                    admin: admin.into(),
                    degraded: false,
                }));
            }
        }

        if let Some(token) = fallback_token {
            if let Some(claims) = self.decode_fallback_token(token) {
                // No server-side session backs this grant
                tracing::warn!(
                    admin_id = claims.sub,
                    "granting degraded-trust access from fallback token"
                );
                let admin = self.store.get(claims.sub).await?;
                return Ok(Some(AdminIdentity {
                    admin: admin.into(),
                    degraded: true,
                }));
            }
        }

        Ok(None)
    }
}
