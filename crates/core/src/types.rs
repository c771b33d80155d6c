use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A taxi-top digital screen available for campaign bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screen {
    pub id: Uuid,
    pub name: String,
    /// Free-text location label, e.g. "Oxford Street, London".
    pub location: String,
    /// WGS84 degrees. Valid range [-90, 90]; enforced at the store boundary.
    pub latitude: f64,
    /// WGS84 degrees. Valid range [-180, 180]; enforced at the store boundary.
    pub longitude: f64,
    pub width: u32,
    pub height: u32,
    pub resolution: String,
    pub status: ScreenStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreenStatus {
    Active,
    Inactive,
}

/// A time-bounded assignment of a campaign to a screen.
///
/// The interval is half-open: the booking covers `[start_date, end_date)`.
/// A booking whose `end_date` has passed no longer counts toward screen
/// capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub screen_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Half-open interval overlap: `[a, b)` and `[c, d)` overlap iff
    /// `a < d && c < b`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_date < end && start < self.end_date
    }
}

/// An advertiser campaign. Owned by the creating user; ownership never
/// transfers, and every read/update/delete is scoped to the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    /// Total budget in currency units. Positive.
    pub budget: f64,
    /// Amount spent so far. `spent <= budget` is a soft expectation, not
    /// enforced.
    pub spent: f64,
    pub target_location: String,
    pub target_radius_km: f64,
    pub creative: AdCreative,
    pub target_audience: TargetAudience,
    pub status: CampaignStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

/// Ad creative content for a taxi-top placement. Stored as a typed value;
/// JSON encoding happens only at the persistence edge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdCreative {
    pub headline: String,
    pub description: String,
    pub cta: String,
    #[serde(default)]
    pub logo_concept: String,
    #[serde(default)]
    pub animation_suggestion: String,
    #[serde(default)]
    pub color_scheme: String,
    #[serde(default)]
    pub visual_elements: String,
}

/// Audience targeting attributes attached to a campaign.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetAudience {
    #[serde(default)]
    pub business_category: BusinessCategory,
    #[serde(default)]
    pub age_range: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Advertiser business category.
///
/// The wire format keeps the human-readable labels the platform has always
/// used; anything unrecognized deserializes to `Other`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum BusinessCategory {
    RestaurantFood,
    RetailShopping,
    ProfessionalServices,
    HealthBeauty,
    Automotive,
    #[default]
    Other,
}

impl From<String> for BusinessCategory {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<BusinessCategory> for String {
    fn from(category: BusinessCategory) -> Self {
        category.label().to_string()
    }
}

impl BusinessCategory {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Restaurant & Food" => Self::RestaurantFood,
            "Retail & Shopping" => Self::RetailShopping,
            "Professional Services" => Self::ProfessionalServices,
            "Health & Beauty" => Self::HealthBeauty,
            "Automotive" => Self::Automotive,
            _ => Self::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::RestaurantFood => "Restaurant & Food",
            Self::RetailShopping => "Retail & Shopping",
            Self::ProfessionalServices => "Professional Services",
            Self::HealthBeauty => "Health & Beauty",
            Self::Automotive => "Automotive",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for BusinessCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A registered advertiser account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub business_name: Option<String>,
    pub business_category: BusinessCategory,
    pub created_at: DateTime<Utc>,
}
