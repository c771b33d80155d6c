//! Deterministic template creatives, used whenever no generation provider
//! is configured or the provider fails. Same category in, same creative
//! out.

use canopy_core::types::{AdCreative, BusinessCategory};

/// Template creative for a business category.
pub fn fallback_creative(category: BusinessCategory) -> AdCreative {
    let label = category.label();
    AdCreative {
        headline: format!("{label} Ultimate Experience"),
        description: "Discover something extraordinary today!".to_string(),
        cta: "Experience Now".to_string(),
        logo_concept: format!("{label} themed logo with modern, clean design"),
        animation_suggestion: "Smooth fade transitions with subtle animations".to_string(),
        color_scheme: "Orange and white with complementary accents".to_string(),
        visual_elements: "Professional imagery with motion graphics and effects".to_string(),
    }
}
