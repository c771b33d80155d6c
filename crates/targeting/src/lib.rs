//! Targeting & estimation engine — screen eligibility (geo + capacity),
//! budget-to-impressions conversion, and targeting recommendations.
//!
//! Everything here is a pure computation over caller-supplied data; the
//! actual booking write (and the capacity race it implies) belongs to the
//! store layer.

pub mod capacity;
pub mod estimator;
pub mod geo;
pub mod recommender;
pub mod tables;

pub use capacity::{EligibilityQuery, ScreenSelector, MAX_BOOKINGS_PER_SCREEN};
pub use estimator::{estimate_impressions, estimate_reach, DEFAULT_CPM};
pub use geo::{BoundingBox, GeoQuery};
pub use recommender::{recommend_targeting, TargetingRecommendation};
