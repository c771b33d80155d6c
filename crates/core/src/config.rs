use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `CANOPY__` and optional config files.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub targeting: TargetingConfig,
    #[serde(default)]
    pub creative: CreativeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

/// Platform pricing. Flat CPM; no auction dynamics.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Cost per 1,000 impressions, in currency units.
    #[serde(default = "default_cpm")]
    pub cpm: f64,
    /// Cost attributed per single impression on dashboards.
    #[serde(default = "default_spend_per_impression")]
    pub spend_per_impression: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TargetingConfig {
    /// Radius applied when a caller supplies a center without a radius.
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
    /// Concurrent bookings allowed per screen.
    #[serde(default = "default_max_bookings_per_screen")]
    pub max_bookings_per_screen: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreativeConfig {
    /// When false, creative generation always uses the template fallback.
    #[serde(default)]
    pub provider_enabled: bool,
}

fn default_node_id() -> String {
    "canopy-1".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_metrics_port() -> u16 {
    9090
}
fn default_cpm() -> f64 {
    7.0
}
fn default_spend_per_impression() -> f64 {
    0.007
}
fn default_radius_km() -> f64 {
    5.0
}
fn default_max_bookings_per_screen() -> usize {
    3
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            port: default_metrics_port(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            cpm: default_cpm(),
            spend_per_impression: default_spend_per_impression(),
        }
    }
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            default_radius_km: default_radius_km(),
            max_bookings_per_screen: default_max_bookings_per_screen(),
        }
    }
}

impl Default for CreativeConfig {
    fn default() -> Self {
        Self {
            provider_enabled: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            api: ApiConfig::default(),
            metrics: MetricsConfig::default(),
            pricing: PricingConfig::default(),
            targeting: TargetingConfig::default(),
            creative: CreativeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and optional config file.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("CANOPY")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
