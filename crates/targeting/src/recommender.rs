//! Targeting recommendation assembly — static market tables shaped by the
//! campaign's category, location, budget, and radius. Deterministic; no
//! external calls; recomputed on every request and never cached here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use canopy_core::types::BusinessCategory;

use crate::tables;

/// Radius assumed when the caller gives none (or a non-positive value).
pub const DEFAULT_RADIUS_KM: f64 = 2.5;

/// Budget assumed when the caller gives none.
pub const DEFAULT_BUDGET: f64 = 1000.0;

/// Radius cap after budget adjustment, km.
const MAX_OPTIMAL_RADIUS_KM: f64 = 6.0;

/// Max strategic recommendation strings returned.
const MAX_RECOMMENDATIONS: usize = 4;

/// A nearby competitor placement. Address and distance are fabricated
/// placeholder values, not geocoded data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorLocation {
    pub name: String,
    pub address: String,
    pub distance: String,
}

/// A high-footfall traffic route archetype near the target location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootfallRoute {
    pub name: String,
    #[serde(rename = "type")]
    pub route_type: String,
    pub traffic: String,
}

/// Structured targeting recommendation. Derived, never persisted; the
/// caller decides whether to cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetingRecommendation {
    pub optimal_radius_km: f64,
    pub competitor_locations: Vec<CompetitorLocation>,
    pub high_footfall_routes: Vec<FootfallRoute>,
    pub peak_hours: Vec<String>,
    pub recommendations: Vec<String>,
    pub location: String,
    pub business_category: BusinessCategory,
    pub budget: f64,
    pub target_radius_km: f64,
    pub generated_at: DateTime<Utc>,
}

/// Assemble a recommendation for the given campaign parameters.
pub fn recommend_targeting(
    category: BusinessCategory,
    location: &str,
    budget: Option<f64>,
    target_radius_km: Option<f64>,
) -> TargetingRecommendation {
    let budget = budget.filter(|b| *b > 0.0).unwrap_or(DEFAULT_BUDGET);
    let radius = target_radius_km
        .filter(|r| *r > 0.0)
        .unwrap_or(DEFAULT_RADIUS_KM);

    let budget_multiplier = if budget > 2000.0 {
        1.3
    } else if budget > 1000.0 {
        1.1
    } else {
        1.0
    };
    let optimal_radius_km =
        ((radius * budget_multiplier).min(MAX_OPTIMAL_RADIUS_KM) * 10.0).round() / 10.0;

    let recommendation = TargetingRecommendation {
        optimal_radius_km,
        competitor_locations: competitor_locations(category, location, radius),
        high_footfall_routes: footfall_routes(location, radius),
        peak_hours: peak_hours(category, radius),
        recommendations: strategic_recommendations(category, location, radius, budget),
        location: location.to_string(),
        business_category: category,
        budget,
        target_radius_km: radius,
        generated_at: Utc::now(),
    };

    debug!(
        category = %category,
        location,
        optimal_radius_km,
        competitors = recommendation.competitor_locations.len(),
        routes = recommendation.high_footfall_routes.len(),
        "targeting recommendation assembled"
    );

    recommendation
}

/// Up to `min(3, floor(radius * 1.5))` competitors with fabricated
/// addresses and linearly-increasing distance labels.
fn competitor_locations(
    category: BusinessCategory,
    location: &str,
    radius: f64,
) -> Vec<CompetitorLocation> {
    let count = ((radius * 1.5).floor() as usize).min(3);
    tables::competitors(category)
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, name)| CompetitorLocation {
            name: (*name).to_string(),
            address: format!("{} {} Street", 100 + index * 200, location),
            distance: format!("{:.1}km", 0.5 + index as f64 * 0.3),
        })
        .collect()
}

/// Up to `min(3, floor(radius * 1.2))` route archetypes, cycling the
/// shared route/traffic label tables.
fn footfall_routes(location: &str, radius: f64) -> Vec<FootfallRoute> {
    let count = ((radius * 1.2).floor() as usize).min(3);
    (0..count)
        .map(|index| FootfallRoute {
            name: format!(
                "{} {}",
                tables::ROUTE_TYPES[index % tables::ROUTE_TYPES.len()],
                location
            ),
            route_type: tables::TRAFFIC_TYPES[index % tables::TRAFFIC_TYPES.len()].to_string(),
            traffic: tables::TRAFFIC_LEVELS[index % tables::TRAFFIC_LEVELS.len()].to_string(),
        })
        .collect()
}

/// First `min(2, floor(radius))` peak-hour labels for the category.
fn peak_hours(category: BusinessCategory, radius: f64) -> Vec<String> {
    let count = (radius.floor() as usize).min(2);
    tables::peak_hours(category)
        .iter()
        .take(count)
        .map(|s| (*s).to_string())
        .collect()
}

/// Three category strings plus conditional extras, capped at four total.
fn strategic_recommendations(
    category: BusinessCategory,
    location: &str,
    radius: f64,
    budget: f64,
) -> Vec<String> {
    let mut recommendations: Vec<String> = tables::base_recommendations(category)
        .iter()
        .take(3)
        .map(|s| (*s).to_string())
        .collect();

    if radius > 3.0 {
        recommendations.push(format!(
            "With a {radius}km radius, consider targeting multiple city zones"
        ));
    }
    if budget > 2000.0 {
        recommendations.push(
            "High budget allows for premium screen placements and extended hours".to_string(),
        );
    }
    if tables::MAJOR_CITIES.iter().any(|city| location.contains(city)) {
        recommendations.push(
            "Major city location enables access to high-traffic commercial areas".to_string(),
        );
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_list_never_exceeds_cap() {
        // Every trigger firing at once still caps at 4.
        let rec = recommend_targeting(
            BusinessCategory::RestaurantFood,
            "London",
            Some(5000.0),
            Some(5.0),
        );
        assert_eq!(rec.recommendations.len(), 4);

        for category in [
            BusinessCategory::RetailShopping,
            BusinessCategory::Automotive,
            BusinessCategory::Other,
        ] {
            for radius in [0.5, 2.5, 10.0] {
                for budget in [100.0, 1500.0, 9000.0] {
                    let rec =
                        recommend_targeting(category, "Leeds", Some(budget), Some(radius));
                    assert!(rec.recommendations.len() <= 4);
                }
            }
        }
    }

    #[test]
    fn counts_scale_with_radius() {
        let rec = recommend_targeting(
            BusinessCategory::RetailShopping,
            "Manchester",
            Some(500.0),
            Some(2.5),
        );
        // floor(2.5 * 1.5) = 3, floor(2.5 * 1.2) = 3, floor(2.5) = 2
        assert_eq!(rec.competitor_locations.len(), 3);
        assert_eq!(rec.high_footfall_routes.len(), 3);
        assert_eq!(rec.peak_hours.len(), 2);

        let rec = recommend_targeting(
            BusinessCategory::RetailShopping,
            "Manchester",
            Some(500.0),
            Some(0.5),
        );
        // floor(0.75) = 0, floor(0.6) = 0, floor(0.5) = 0
        assert!(rec.competitor_locations.is_empty());
        assert!(rec.high_footfall_routes.is_empty());
        assert!(rec.peak_hours.is_empty());
    }

    #[test]
    fn competitor_labels_are_fabricated_series() {
        let rec = recommend_targeting(
            BusinessCategory::RestaurantFood,
            "Soho",
            Some(500.0),
            Some(3.0),
        );
        let competitors = &rec.competitor_locations;
        assert_eq!(competitors[0].name, "McDonald's");
        assert_eq!(competitors[0].address, "100 Soho Street");
        assert_eq!(competitors[0].distance, "0.5km");
        assert_eq!(competitors[1].address, "300 Soho Street");
        assert_eq!(competitors[1].distance, "0.8km");
        assert_eq!(competitors[2].distance, "1.1km");
    }

    #[test]
    fn budget_adjusts_optimal_radius() {
        // <= 1000: multiplier 1.0
        let rec =
            recommend_targeting(BusinessCategory::Other, "Leeds", Some(500.0), Some(2.5));
        assert_eq!(rec.optimal_radius_km, 2.5);
        // > 1000: 1.1
        let rec =
            recommend_targeting(BusinessCategory::Other, "Leeds", Some(1500.0), Some(2.5));
        assert_eq!(rec.optimal_radius_km, 2.8);
        // > 2000: 1.3
        let rec =
            recommend_targeting(BusinessCategory::Other, "Leeds", Some(2500.0), Some(2.5));
        assert_eq!(rec.optimal_radius_km, 3.2);
        // Capped at 6.0
        let rec =
            recommend_targeting(BusinessCategory::Other, "Leeds", Some(2500.0), Some(5.0));
        assert_eq!(rec.optimal_radius_km, 6.0);
    }

    #[test]
    fn missing_inputs_fall_back_to_defaults() {
        let rec = recommend_targeting(BusinessCategory::Other, "Leeds", None, None);
        assert_eq!(rec.budget, DEFAULT_BUDGET);
        assert_eq!(rec.target_radius_km, DEFAULT_RADIUS_KM);

        // Zero radius is treated as absent, like the legacy API did.
        let rec = recommend_targeting(BusinessCategory::Other, "Leeds", Some(0.0), Some(0.0));
        assert_eq!(rec.budget, DEFAULT_BUDGET);
        assert_eq!(rec.target_radius_km, DEFAULT_RADIUS_KM);
    }

    #[test]
    fn unknown_category_gets_generic_tables() {
        let rec =
            recommend_targeting(BusinessCategory::Other, "Hull", Some(500.0), Some(2.0));
        assert_eq!(rec.competitor_locations[0].name, "Competitor A");
        assert_eq!(rec.peak_hours, vec!["8-10 AM", "5-7 PM"]);
    }

    #[test]
    fn major_city_and_high_budget_extras() {
        let rec = recommend_targeting(
            BusinessCategory::ProfessionalServices,
            "Birmingham",
            Some(2500.0),
            Some(2.0),
        );
        // 3 base + (no radius extra) + budget extra, city extra truncated by the cap.
        assert_eq!(rec.recommendations.len(), 4);
        assert!(rec.recommendations[3].contains("High budget"));

        let rec = recommend_targeting(
            BusinessCategory::ProfessionalServices,
            "Birmingham",
            Some(500.0),
            Some(4.0),
        );
        assert!(rec.recommendations[3].contains("4km radius"));
    }
}
