//! REST API for the Canopy campaign platform.

pub mod auth;
pub mod campaign_rest;
pub mod creative_rest;
pub mod payment_rest;
pub mod rest;
pub mod screen_rest;
pub mod server;
pub mod targeting_rest;

pub use rest::AppState;
pub use server::ApiServer;
