//! Campaign metrics snapshots.
//!
//! A campaign that has not delivered yet still needs believable dashboard
//! numbers. The snapshot backfills them from the seeded synthesizer, keyed
//! by the campaign id, so the figures are stable across reloads and
//! processes. Once real spend exists, the snapshot is derived from it
//! instead.

use serde::{Deserialize, Serialize};
use tracing::debug;

use canopy_core::types::Campaign;
use canopy_targeting::estimator::{
    effective_cpm, estimate_reach, estimate_spend, SPEND_PER_IMPRESSION,
};

use crate::synthetic::synthesize_metric;

/// Synthetic impression backfill range.
const IMPRESSIONS_RANGE: (i64, i64) = (1000, 6000);
/// Synthetic reach backfill range.
const REACH_RANGE: (i64, i64) = (500, 2500);
/// Synthetic display CPM backfill range, in pence (5.00 - 8.00).
const CPM_PENCE_RANGE: (i64, i64) = (500, 800);

/// Display metrics for a campaign. `synthetic` marks backfilled numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticMetrics {
    pub impressions: u64,
    pub reach: u64,
    pub spend: f64,
    pub cpm: f64,
    pub synthetic: bool,
}

/// Snapshot for a campaign: real when the campaign has recorded spend,
/// otherwise a deterministic synthetic placeholder.
pub fn metrics_for_campaign(campaign: &Campaign) -> SyntheticMetrics {
    if campaign.spent > 0.0 {
        let impressions = (campaign.spent / SPEND_PER_IMPRESSION).round() as u64;
        return SyntheticMetrics {
            impressions,
            reach: estimate_reach(impressions),
            spend: campaign.spent,
            cpm: effective_cpm(impressions, campaign.spent),
            synthetic: false,
        };
    }

    let id = campaign.id.to_string();
    let impressions = synthesize_metric(&id, IMPRESSIONS_RANGE.0, IMPRESSIONS_RANGE.1) as u64;
    let reach = synthesize_metric(
        &format!("{id}:reach"),
        REACH_RANGE.0,
        REACH_RANGE.1,
    ) as u64;
    let cpm =
        synthesize_metric(&format!("{id}:cpm"), CPM_PENCE_RANGE.0, CPM_PENCE_RANGE.1) as f64
            / 100.0;

    debug!(campaign_id = %campaign.id, impressions, reach, "synthetic metrics backfilled");

    SyntheticMetrics {
        impressions,
        reach,
        spend: estimate_spend(impressions),
        cpm,
        synthetic: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_core::types::{AdCreative, CampaignStatus, TargetAudience};
    use chrono::Utc;
    use uuid::Uuid;

    fn campaign(spent: f64) -> Campaign {
        Campaign {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Summer Sale".to_string(),
            description: "Promoting summer menu items".to_string(),
            budget: 500.0,
            spent,
            target_location: "Central London".to_string(),
            target_radius_km: 2.5,
            creative: AdCreative::default(),
            target_audience: TargetAudience::default(),
            status: CampaignStatus::Active,
            start_date: None,
            end_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn backfill_is_stable_per_campaign() {
        let c = campaign(0.0);
        let first = metrics_for_campaign(&c);
        let second = metrics_for_campaign(&c);
        assert!(first.synthetic);
        assert_eq!(first.impressions, second.impressions);
        assert_eq!(first.reach, second.reach);
        assert_eq!(first.spend, second.spend);
        assert_eq!(first.cpm, second.cpm);
    }

    #[test]
    fn backfill_stays_in_display_ranges() {
        for _ in 0..20 {
            let metrics = metrics_for_campaign(&campaign(0.0));
            assert!((1000..=6000).contains(&metrics.impressions));
            assert!((500..=2500).contains(&metrics.reach));
            assert!((5.0..=8.0).contains(&metrics.cpm));
            assert!((metrics.spend - metrics.impressions as f64 * 0.007).abs() < 1e-9);
        }
    }

    #[test]
    fn recorded_spend_takes_precedence() {
        let metrics = metrics_for_campaign(&campaign(70.0));
        assert!(!metrics.synthetic);
        // 70.0 / 0.007 = 10000 impressions at the flat price
        assert_eq!(metrics.impressions, 10000);
        assert_eq!(metrics.reach, 3000);
        assert_eq!(metrics.spend, 70.0);
        assert!((metrics.cpm - 7.0).abs() < 1e-9);
    }
}
