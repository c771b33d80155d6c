//! Shared REST state, error mapping, and operational endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::error;

use canopy_billing::PaymentEngine;
use canopy_core::config::AppConfig;
use canopy_core::CanopyError;
use canopy_creative::CreativeStudio;
use canopy_store::CanopyStores;
use canopy_targeting::ScreenSelector;

/// Shared application state for REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub stores: CanopyStores,
    pub payments: Arc<PaymentEngine>,
    pub studio: CreativeStudio,
    pub selector: ScreenSelector,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        stores: CanopyStores,
        payments: Arc<PaymentEngine>,
        studio: CreativeStudio,
    ) -> Self {
        let selector = ScreenSelector::new(config.targeting.max_bookings_per_screen);
        Self {
            config: Arc::new(config),
            stores,
            payments,
            studio,
            selector,
            start_time: Instant::now(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Wire error: maps the domain taxonomy onto HTTP status codes. Internal
/// failures are logged and returned with a generic message.
pub struct ApiError(pub CanopyError);

impl<E> From<E> for ApiError
where
    E: Into<CanopyError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            CanopyError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
            CanopyError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            CanopyError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
            CanopyError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self.0, "request failed");
            metrics::counter!("api.errors").increment(1);
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (
            status,
            Json(ErrorResponse {
                error: code.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub node_id: String,
    pub uptime_secs: u64,
}

/// GET /health — Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        node_id: state.config.node_id.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /ready — Readiness probe.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.start_time.elapsed().as_secs() > 0 {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /live — Liveness probe.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}
