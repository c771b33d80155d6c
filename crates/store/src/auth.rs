//! User accounts and bearer-token sessions.
//!
//! Development: plain-text credential comparison plus a shared dev
//! password. Production: replace with argon2 password hashes and JWT
//! (jsonwebtoken) before exposing this to real traffic.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use canopy_core::types::{BusinessCategory, User};
use canopy_core::{CanopyError, CanopyResult};

/// Prefix for development bearer tokens.
const DEV_TOKEN_PREFIX: &str = "cn_dev_";

/// Shared development password accepted for any registered account.
const DEV_MASTER_PASSWORD: &str = "canopy2024";

const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone)]
struct Session {
    user_id: Uuid,
    expires_at: DateTime<Utc>,
}

pub struct AuthStore {
    users_by_email: DashMap<String, User>,
    sessions: DashMap<String, Session>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self {
            users_by_email: DashMap::new(),
            sessions: DashMap::new(),
        }
    }

    pub fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
        business_name: Option<String>,
        business_category: BusinessCategory,
    ) -> CanopyResult<User> {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(CanopyError::InvalidInput("invalid email".to_string()));
        }
        if self.users_by_email.contains_key(email) {
            return Err(CanopyError::Conflict(format!(
                "account {email} already exists"
            )));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
            business_name,
            business_category,
            created_at: Utc::now(),
        };
        info!(user_id = %user.id, email = %user.email, "user registered");
        self.users_by_email.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    /// Validate credentials and mint a bearer token.
    pub fn login(&self, email: &str, password: &str) -> CanopyResult<(String, User)> {
        let user = self
            .users_by_email
            .get(email)
            .map(|r| r.value().clone())
            .ok_or(CanopyError::Unauthorized)?;

        if user.password != password && password != DEV_MASTER_PASSWORD {
            return Err(CanopyError::Unauthorized);
        }

        let token = generate_token();
        self.sessions.insert(
            token.clone(),
            Session {
                user_id: user.id,
                expires_at: Utc::now() + Duration::hours(SESSION_TTL_HOURS),
            },
        );
        info!(user_id = %user.id, "session created");
        Ok((token, user))
    }

    /// Resolve a bearer token to the owning user id. Expired or unknown
    /// tokens resolve to nothing; expired ones are dropped on the way.
    pub fn resolve_token(&self, token: &str) -> Option<Uuid> {
        let session = self.sessions.get(token).map(|r| r.value().clone())?;
        if session.expires_at <= Utc::now() {
            self.sessions.remove(token);
            return None;
        }
        Some(session.user_id)
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    let bytes: [u8; 32] = rng.gen();
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("{DEV_TOKEN_PREFIX}{hex}")
}
