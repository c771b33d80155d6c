//! API server — router assembly and HTTP/metrics startup.

use axum::routing::{get, post};
use axum::{middleware, Router};
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::rest::AppState;
use crate::{auth, campaign_rest, creative_rest, payment_rest, rest, screen_rest, targeting_rest};

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    // Everything behind the bearer-token middleware.
    let protected = Router::new()
        .route(
            "/v1/campaigns",
            get(campaign_rest::list_campaigns).post(campaign_rest::create_campaign),
        )
        .route(
            "/v1/campaigns/:id",
            get(campaign_rest::get_campaign)
                .put(campaign_rest::update_campaign)
                .delete(campaign_rest::delete_campaign),
        )
        .route("/v1/campaigns/:id/pause", post(campaign_rest::pause_campaign))
        .route("/v1/campaigns/:id/resume", post(campaign_rest::resume_campaign))
        .route("/v1/campaigns/:id/metrics", get(campaign_rest::campaign_metrics))
        .route("/v1/targeting/recommend", post(targeting_rest::recommend))
        .route("/v1/targeting/estimate", post(targeting_rest::estimate))
        .route("/v1/creative/generate", post(creative_rest::generate_creative))
        .route("/v1/payments/intent", post(payment_rest::create_intent))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    Router::new()
        .merge(protected)
        // Public surface
        .route("/v1/auth/signup", post(auth::handle_signup))
        .route("/v1/auth/login", post(auth::handle_login))
        .route("/v1/screens", get(screen_rest::list_screens))
        .route("/v1/webhooks/payment", post(payment_rest::payment_webhook))
        // Operational endpoints
        .route("/health", get(rest::health_check))
        .route("/ready", get(rest::readiness))
        .route("/live", get(rest::liveness))
        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP server wrapping the router, plus the Prometheus exporter.
pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Start the HTTP server (blocks until shutdown).
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let addr = SocketAddr::new(
            self.state.config.api.host.parse()?,
            self.state.config.api.http_port,
        );

        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router(self.state.clone())).await?;

        Ok(())
    }

    /// Start the metrics exporter on its own port.
    pub async fn start_metrics(&self) -> anyhow::Result<()> {
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        let handle = builder
            .with_http_listener(SocketAddr::new(
                self.state.config.api.host.parse()?,
                self.state.config.metrics.port,
            ))
            .install_recorder()?;

        info!(port = self.state.config.metrics.port, "Metrics exporter started");

        // Keep the handle alive
        std::mem::forget(handle);
        Ok(())
    }
}
