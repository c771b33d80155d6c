//! Campaign store. Every read and mutation is scoped to the owning user;
//! a campaign belonging to someone else is indistinguishable from one that
//! does not exist.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use canopy_core::types::{AdCreative, Campaign, CampaignStatus, TargetAudience};
use canopy_core::{CanopyError, CanopyResult};

pub struct CampaignStore {
    campaigns: DashMap<Uuid, Campaign>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCampaignRequest {
    pub name: String,
    pub description: String,
    pub budget: f64,
    pub target_location: String,
    pub target_radius_km: f64,
    #[serde(default)]
    pub creative: AdCreative,
    #[serde(default)]
    pub target_audience: TargetAudience,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCampaignRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub target_location: Option<String>,
    pub target_radius_km: Option<f64>,
    pub creative: Option<AdCreative>,
    pub target_audience: Option<TargetAudience>,
    pub status: Option<CampaignStatus>,
}

impl CampaignStore {
    pub fn new() -> Self {
        Self {
            campaigns: DashMap::new(),
        }
    }

    pub fn create(&self, user_id: Uuid, req: CreateCampaignRequest) -> CanopyResult<Campaign> {
        if req.name.trim().is_empty() {
            return Err(CanopyError::InvalidInput(
                "campaign name must not be empty".to_string(),
            ));
        }
        if req.budget <= 0.0 {
            return Err(CanopyError::InvalidInput(
                "campaign budget must be positive".to_string(),
            ));
        }
        if req.target_radius_km <= 0.0 {
            return Err(CanopyError::InvalidInput(
                "target radius must be positive".to_string(),
            ));
        }

        let now = Utc::now();
        let campaign = Campaign {
            id: Uuid::new_v4(),
            user_id,
            name: req.name,
            description: req.description,
            budget: req.budget,
            spent: 0.0,
            target_location: req.target_location,
            target_radius_km: req.target_radius_km,
            creative: req.creative,
            target_audience: req.target_audience,
            status: CampaignStatus::Draft,
            start_date: None,
            end_date: None,
            created_at: now,
            updated_at: now,
        };
        info!(campaign_id = %campaign.id, user_id = %user_id, name = %campaign.name, "campaign created");
        self.campaigns.insert(campaign.id, campaign.clone());
        Ok(campaign)
    }

    /// The user's campaigns, newest first.
    pub fn list_for_user(&self, user_id: Uuid) -> Vec<Campaign> {
        let mut campaigns: Vec<Campaign> = self
            .campaigns
            .iter()
            .filter(|r| r.value().user_id == user_id)
            .map(|r| r.value().clone())
            .collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        campaigns
    }

    pub fn get_for_user(&self, id: Uuid, user_id: Uuid) -> Option<Campaign> {
        self.campaigns
            .get(&id)
            .filter(|r| r.value().user_id == user_id)
            .map(|r| r.value().clone())
    }

    pub fn update_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
        req: UpdateCampaignRequest,
    ) -> Option<Campaign> {
        self.campaigns
            .get_mut(&id)
            .filter(|r| r.value().user_id == user_id)
            .map(|mut entry| {
                let c = entry.value_mut();
                if let Some(name) = req.name {
                    c.name = name;
                }
                if let Some(description) = req.description {
                    c.description = description;
                }
                if let Some(budget) = req.budget {
                    c.budget = budget;
                }
                if let Some(location) = req.target_location {
                    c.target_location = location;
                }
                if let Some(radius) = req.target_radius_km {
                    c.target_radius_km = radius;
                }
                if let Some(creative) = req.creative {
                    c.creative = creative;
                }
                if let Some(audience) = req.target_audience {
                    c.target_audience = audience;
                }
                if let Some(status) = req.status {
                    c.status = status;
                }
                c.updated_at = Utc::now();
                c.clone()
            })
    }

    pub fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> bool {
        self.campaigns
            .remove_if(&id, |_, campaign| campaign.user_id == user_id)
            .is_some()
    }

    /// Payment-capture path: flips the campaign Active and stamps the start
    /// date. Not owner-scoped — the webhook carries no session, only the
    /// campaign reference from the payment metadata.
    pub fn activate(&self, id: Uuid, start_date: DateTime<Utc>) -> CanopyResult<Campaign> {
        let mut entry = self
            .campaigns
            .get_mut(&id)
            .ok_or_else(|| CanopyError::NotFound(format!("campaign {id}")))?;
        let c = entry.value_mut();
        c.status = CampaignStatus::Active;
        c.start_date = Some(start_date);
        c.updated_at = Utc::now();
        info!(campaign_id = %id, "campaign activated");
        Ok(c.clone())
    }

    /// Owner toggling Active -> Paused.
    pub fn pause_for_user(&self, id: Uuid, user_id: Uuid) -> CanopyResult<Campaign> {
        self.toggle_for_user(id, user_id, CampaignStatus::Active, CampaignStatus::Paused)
    }

    /// Owner toggling Paused -> Active.
    pub fn resume_for_user(&self, id: Uuid, user_id: Uuid) -> CanopyResult<Campaign> {
        self.toggle_for_user(id, user_id, CampaignStatus::Paused, CampaignStatus::Active)
    }

    fn toggle_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
        from: CampaignStatus,
        to: CampaignStatus,
    ) -> CanopyResult<Campaign> {
        let mut entry = self
            .campaigns
            .get_mut(&id)
            .filter(|r| r.value().user_id == user_id)
            .ok_or_else(|| CanopyError::NotFound(format!("campaign {id}")))?;
        let c = entry.value_mut();
        if c.status != from {
            return Err(CanopyError::Conflict(format!(
                "campaign is {:?}, expected {:?}",
                c.status, from
            )));
        }
        c.status = to;
        c.updated_at = Utc::now();
        Ok(c.clone())
    }
}

impl Default for CampaignStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_req(name: &str) -> CreateCampaignRequest {
        CreateCampaignRequest {
            name: name.to_string(),
            description: "test".to_string(),
            budget: 500.0,
            target_location: "Central London".to_string(),
            target_radius_km: 2.5,
            creative: AdCreative::default(),
            target_audience: TargetAudience::default(),
        }
    }

    #[test]
    fn campaigns_are_owner_scoped() {
        let store = CampaignStore::new();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let campaign = store.create(owner, create_req("Mine")).unwrap();

        assert!(store.get_for_user(campaign.id, owner).is_some());
        assert!(store.get_for_user(campaign.id, stranger).is_none());

        assert!(store
            .update_for_user(campaign.id, stranger, UpdateCampaignRequest::default())
            .is_none());
        assert!(!store.delete_for_user(campaign.id, stranger));

        assert!(store.delete_for_user(campaign.id, owner));
        assert!(store.get_for_user(campaign.id, owner).is_none());
    }

    #[test]
    fn create_starts_in_draft_and_validates() {
        let store = CampaignStore::new();
        let owner = Uuid::new_v4();

        let campaign = store.create(owner, create_req("Launch")).unwrap();
        assert_eq!(campaign.status, CampaignStatus::Draft);
        assert_eq!(campaign.spent, 0.0);
        assert!(campaign.start_date.is_none());

        let mut bad = create_req("No budget");
        bad.budget = 0.0;
        assert!(matches!(
            store.create(owner, bad),
            Err(CanopyError::InvalidInput(_))
        ));

        let mut bad = create_req("Bad radius");
        bad.target_radius_km = -1.0;
        assert!(matches!(
            store.create(owner, bad),
            Err(CanopyError::InvalidInput(_))
        ));
    }

    #[test]
    fn list_is_newest_first() {
        let store = CampaignStore::new();
        let owner = Uuid::new_v4();
        store.create(owner, create_req("first")).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        store.create(owner, create_req("second")).unwrap();

        let campaigns = store.list_for_user(owner);
        assert_eq!(campaigns.len(), 2);
        assert_eq!(campaigns[0].name, "second");
    }

    #[test]
    fn activation_and_pause_lifecycle() {
        let store = CampaignStore::new();
        let owner = Uuid::new_v4();
        let campaign = store.create(owner, create_req("Launch")).unwrap();

        let now = Utc::now();
        let active = store.activate(campaign.id, now).unwrap();
        assert_eq!(active.status, CampaignStatus::Active);
        assert_eq!(active.start_date, Some(now));

        let paused = store.pause_for_user(campaign.id, owner).unwrap();
        assert_eq!(paused.status, CampaignStatus::Paused);

        // Pausing a paused campaign conflicts.
        assert!(matches!(
            store.pause_for_user(campaign.id, owner),
            Err(CanopyError::Conflict(_))
        ));

        let resumed = store.resume_for_user(campaign.id, owner).unwrap();
        assert_eq!(resumed.status, CampaignStatus::Active);
    }

    #[test]
    fn partial_update_keeps_other_fields() {
        let store = CampaignStore::new();
        let owner = Uuid::new_v4();
        let campaign = store.create(owner, create_req("Original")).unwrap();

        let updated = store
            .update_for_user(
                campaign.id,
                owner,
                UpdateCampaignRequest {
                    budget: Some(900.0),
                    ..UpdateCampaignRequest::default()
                },
            )
            .unwrap();
        assert_eq!(updated.budget, 900.0);
        assert_eq!(updated.name, "Original");
        assert_eq!(updated.target_radius_km, 2.5);
    }
}
