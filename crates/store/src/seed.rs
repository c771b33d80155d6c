//! Demo seed data: the central-London screen inventory plus a demo
//! advertiser account with one draft campaign.

use tracing::info;

use canopy_core::types::{AdCreative, BusinessCategory, TargetAudience};

use crate::campaigns::CreateCampaignRequest;
use crate::screens::NewScreen;
use crate::CanopyStores;

pub fn seed_demo_data(stores: &CanopyStores) {
    let screens = [
        ("Oxford Street Screen 1", "Oxford Street, London", 51.5154, -0.1419),
        ("Regent Street Screen 2", "Regent Street, London", 51.5094, -0.1406),
        ("Covent Garden Screen 3", "Covent Garden, London", 51.5118, -0.1234),
        ("Leicester Square Screen 4", "Leicester Square, London", 51.5103, -0.1337),
        ("Piccadilly Circus Screen 5", "Piccadilly Circus, London", 51.5098, -0.1342),
    ];

    for (name, location, latitude, longitude) in screens {
        // Seed coordinates are static and in range; insert cannot fail.
        let _ = stores.screens.insert(NewScreen {
            name: name.to_string(),
            location: location.to_string(),
            latitude,
            longitude,
            width: 1920,
            height: 1080,
            resolution: "1920x1080".to_string(),
        });
    }

    let demo_user = stores
        .auth
        .register(
            "demo@canopy.io",
            "Demo User",
            "demo123",
            Some("Demo Restaurant".to_string()),
            BusinessCategory::RestaurantFood,
        )
        .expect("demo user seeds into an empty store");

    let _ = stores.campaigns.create(
        demo_user.id,
        CreateCampaignRequest {
            name: "Summer Sale Campaign".to_string(),
            description: "Promoting summer menu items".to_string(),
            budget: 500.0,
            target_location: "Central London".to_string(),
            target_radius_km: 2.5,
            creative: AdCreative {
                headline: "Summer Special!".to_string(),
                description: "Fresh seasonal dishes".to_string(),
                cta: "Visit Now".to_string(),
                color_scheme: "Orange and white".to_string(),
                ..AdCreative::default()
            },
            target_audience: TargetAudience {
                business_category: BusinessCategory::RestaurantFood,
                age_range: Some("25-54".to_string()),
                interests: vec!["dining".to_string(), "local events".to_string()],
            },
        },
    );

    info!(screens = screens.len(), "demo data seeded");
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_core::types::ScreenStatus;

    #[test]
    fn demo_seed_populates_inventory_and_account() {
        let stores = CanopyStores::with_demo_data(3);

        let screens = stores.screens.list_by_status(ScreenStatus::Active);
        assert_eq!(screens.len(), 5);
        assert!(screens.iter().all(|s| s.resolution == "1920x1080"));

        let (token, user) = stores.auth.login("demo@canopy.io", "demo123").unwrap();
        assert!(stores.auth.resolve_token(&token).is_some());

        let campaigns = stores.campaigns.list_for_user(user.id);
        assert_eq!(campaigns.len(), 1);
        assert_eq!(campaigns[0].name, "Summer Sale Campaign");
    }
}
