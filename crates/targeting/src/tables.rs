//! Static lookup tables backing the targeting recommender, keyed by
//! business category. Placeholder market data, not geocoded.

use canopy_core::types::BusinessCategory;

pub const ROUTE_TYPES: [&str; 6] = [
    "High Street",
    "Station Road",
    "Shopping Centre",
    "Business District",
    "University Area",
    "Industrial Estate",
];

pub const TRAFFIC_TYPES: [&str; 6] = [
    "Shopping District",
    "Commuter Route",
    "Business Area",
    "Tourist Zone",
    "Student Area",
    "Residential",
];

pub const TRAFFIC_LEVELS: [&str; 6] = [
    "High",
    "Peak Hours",
    "All Day",
    "Evening",
    "Weekend",
    "Business Hours",
];

/// City substrings that unlock the major-city recommendation.
pub const MAJOR_CITIES: [&str; 3] = ["London", "Manchester", "Birmingham"];

pub fn competitors(category: BusinessCategory) -> &'static [&'static str] {
    match category {
        BusinessCategory::RestaurantFood => &[
            "McDonald's",
            "Subway",
            "Pizza Express",
            "KFC",
            "Burger King",
            "Domino's",
        ],
        BusinessCategory::RetailShopping => &[
            "Primark",
            "H&M",
            "Zara",
            "Next",
            "Marks & Spencer",
            "John Lewis",
        ],
        BusinessCategory::ProfessionalServices => &[
            "Deloitte",
            "PwC",
            "KPMG",
            "EY",
            "Accenture",
            "McKinsey",
        ],
        BusinessCategory::HealthBeauty => &[
            "Boots",
            "Superdrug",
            "The Body Shop",
            "Lush",
            "MAC",
            "Sephora",
        ],
        BusinessCategory::Automotive => &[
            "BMW",
            "Mercedes-Benz",
            "Audi",
            "Toyota",
            "Ford",
            "Volkswagen",
        ],
        BusinessCategory::Other => &["Competitor A", "Competitor B", "Competitor C"],
    }
}

pub fn peak_hours(category: BusinessCategory) -> &'static [&'static str] {
    match category {
        BusinessCategory::RestaurantFood => &["12-2 PM", "6-8 PM", "11 AM-1 PM", "7-9 PM"],
        BusinessCategory::RetailShopping => &["10 AM-6 PM", "7-9 PM", "11 AM-5 PM", "6-8 PM"],
        BusinessCategory::ProfessionalServices => &["8-10 AM", "5-7 PM", "9-11 AM", "4-6 PM"],
        BusinessCategory::HealthBeauty => &["10 AM-4 PM", "6-8 PM", "11 AM-3 PM", "5-7 PM"],
        BusinessCategory::Automotive => &[
            "9 AM-6 PM",
            "10 AM-4 PM (Weekends)",
            "8 AM-5 PM",
            "11 AM-3 PM",
        ],
        BusinessCategory::Other => &["8-10 AM", "5-7 PM"],
    }
}

pub fn base_recommendations(category: BusinessCategory) -> &'static [&'static str] {
    match category {
        BusinessCategory::RestaurantFood => &[
            "Target lunch and dinner rush hours for maximum visibility",
            "Focus on commuter routes and shopping districts",
            "Consider competitor locations for conquesting campaigns",
            "Weekend targeting for family dining occasions",
        ],
        BusinessCategory::RetailShopping => &[
            "Target shopping districts and high-street locations",
            "Focus on weekend and holiday shopping periods",
            "Consider tourist areas for seasonal campaigns",
            "Competitor conquesting in shopping centres",
        ],
        BusinessCategory::ProfessionalServices => &[
            "Target business districts during commuter hours",
            "Focus on financial and corporate areas",
            "Consider competitor locations for B2B conquesting",
            "Weekday targeting for professional audience",
        ],
        BusinessCategory::HealthBeauty => &[
            "Target shopping areas and health centres",
            "Focus on weekend and evening hours",
            "Consider student areas for younger demographics",
            "Competitor conquesting in pharmacy locations",
        ],
        BusinessCategory::Automotive => &[
            "Target motorway access points and industrial areas",
            "Focus on weekend showroom visits",
            "Consider competitor dealership locations",
            "Business hours targeting for fleet customers",
        ],
        BusinessCategory::Other => &[
            "Target high-footfall areas within your radius",
            "Focus on commuter routes during peak hours",
            "Consider competitor locations for conquesting",
            "Optimize for your business hours",
        ],
    }
}
