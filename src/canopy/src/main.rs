//! Canopy — taxi-top digital-screen advertising platform.
//!
//! Main entry point that wires configuration, stores, and the API server.

use canopy_api::{ApiServer, AppState};
use canopy_billing::PaymentEngine;
use canopy_core::config::AppConfig;
use canopy_creative::CreativeStudio;
use canopy_store::CanopyStores;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Taxi-top digital-screen advertising platform")]
#[command(version)]
struct Cli {
    /// HTTP port (overrides config)
    #[arg(long, env = "CANOPY__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Metrics port (overrides config)
    #[arg(long, env = "CANOPY__METRICS__PORT")]
    metrics_port: Option<u16>,

    /// Skip seeding the demo inventory and account
    #[arg(long, default_value_t = false)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "canopy=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("Canopy starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(port) = cli.metrics_port {
        config.metrics.port = port;
    }

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        metrics_port = config.metrics.port,
        cpm = config.pricing.cpm,
        "Configuration loaded"
    );

    // Initialize stores
    let stores = if cli.no_seed {
        CanopyStores::new(config.targeting.max_bookings_per_screen)
    } else {
        CanopyStores::with_demo_data(config.targeting.max_bookings_per_screen)
    };

    // Creative generation: no upstream provider wired in this build, so the
    // studio serves deterministic templates either way.
    if config.creative.provider_enabled {
        warn!("creative.provider_enabled is set but no provider is configured; using templates");
    }
    let studio = CreativeStudio::template_only();

    let state = AppState::new(config, stores, Arc::new(PaymentEngine::new()), studio);
    let api_server = ApiServer::new(state);

    // Start metrics exporter
    if let Err(e) = api_server.start_metrics().await {
        error!(error = %e, "Failed to start metrics exporter");
    }

    info!("Canopy is ready to serve traffic");

    // Start HTTP server (blocks until shutdown)
    api_server.start_http().await?;

    Ok(())
}
