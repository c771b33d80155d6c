//! Session endpoints and the bearer-token middleware guarding the
//! campaign surface.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use canopy_core::types::{BusinessCategory, User};
use canopy_core::CanopyError;

use crate::rest::{ApiError, AppState};

/// Authenticated caller, inserted by the middleware for downstream
/// handlers.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Uuid);

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub business_category: BusinessCategory,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub business_name: Option<String>,
    pub business_category: BusinessCategory,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            business_name: user.business_name,
            business_category: user.business_category,
            created_at: user.created_at,
        }
    }
}

/// POST /v1/auth/signup — register an advertiser account.
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.stores.auth.register(
        &req.email,
        &req.name,
        &req.password,
        req.business_name,
        req.business_category,
    )?;
    metrics::counter!("auth.signups").increment(1);
    Ok(Json(user.into()))
}

/// POST /v1/auth/login — validate credentials, mint a bearer token.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let (token, user) = state.stores.auth.login(&req.email, &req.password)?;
    metrics::counter!("auth.logins").increment(1);
    Ok(Json(SessionResponse {
        token,
        user_id: user.id,
        email: user.email,
        name: user.name,
    }))
}

/// Middleware for the authenticated routes: resolves the bearer token to a
/// user id, rejecting with 401 otherwise.
pub async fn require_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    let user_id = token.and_then(|t| state.stores.auth.resolve_token(t));

    match user_id {
        Some(user_id) => {
            req.extensions_mut().insert(CurrentUser(user_id));
            next.run(req).await
        }
        None => ApiError(CanopyError::Unauthorized).into_response(),
    }
}
