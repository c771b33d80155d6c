//! Campaign payments — intent creation and webhook-style capture events.
//! Backed by DashMap for development; swap to a real Stripe integration
//! for production.

pub mod payments;

pub use payments::{PaymentEngine, PaymentEvent, PaymentIntent, PaymentStatus};
