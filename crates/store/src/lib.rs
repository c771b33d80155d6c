//! In-memory stores backed by DashMap.
//!
//! Production: replace with PostgreSQL (sqlx) or similar ACID store.
//! This provides the same API surface for development and testing.

pub mod auth;
pub mod bookings;
pub mod campaigns;
pub mod screens;
pub mod seed;

pub use auth::AuthStore;
pub use bookings::BookingStore;
pub use campaigns::{CampaignStore, CreateCampaignRequest, UpdateCampaignRequest};
pub use screens::ScreenStore;

use std::sync::Arc;

/// All application stores, shared across handlers.
#[derive(Clone)]
pub struct CanopyStores {
    pub screens: Arc<ScreenStore>,
    pub bookings: Arc<BookingStore>,
    pub campaigns: Arc<CampaignStore>,
    pub auth: Arc<AuthStore>,
}

impl CanopyStores {
    pub fn new(max_bookings_per_screen: usize) -> Self {
        Self {
            screens: Arc::new(ScreenStore::new()),
            bookings: Arc::new(BookingStore::new(max_bookings_per_screen)),
            campaigns: Arc::new(CampaignStore::new()),
            auth: Arc::new(AuthStore::new()),
        }
    }

    /// New stores pre-populated with the demo inventory and account.
    pub fn with_demo_data(max_bookings_per_screen: usize) -> Self {
        let stores = Self::new(max_bookings_per_screen);
        seed::seed_demo_data(&stores);
        stores
    }
}
