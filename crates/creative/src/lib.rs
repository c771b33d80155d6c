//! Ad creative generation — a pluggable text-generation provider behind a
//! deterministic template fallback.

pub mod fallback;
pub mod studio;

pub use fallback::fallback_creative;
pub use studio::{CreativeProvider, CreativeRequest, CreativeStudio};
