//! Targeting recommendation endpoint.

use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;

use serde::Serialize;

use canopy_core::types::BusinessCategory;
use canopy_core::CanopyError;
use canopy_targeting::{estimate_impressions, estimate_reach, recommend_targeting, TargetingRecommendation};

use crate::auth::CurrentUser;
use crate::rest::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub business_category: BusinessCategory,
    pub location: String,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub target_radius_km: Option<f64>,
}

/// POST /v1/targeting/recommend — assemble a recommendation for the
/// campaign wizard. Recomputed on every call; nothing is cached or stored.
pub async fn recommend(
    State(_state): State<AppState>,
    Extension(_user): Extension<CurrentUser>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<TargetingRecommendation>, ApiError> {
    if req.location.trim().is_empty() {
        return Err(ApiError(CanopyError::InvalidInput(
            "location must not be empty".to_string(),
        )));
    }

    let recommendation = recommend_targeting(
        req.business_category,
        &req.location,
        req.budget,
        req.target_radius_km,
    );
    metrics::counter!("targeting.recommendations").increment(1);
    Ok(Json(recommendation))
}

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub budget: f64,
}

#[derive(Serialize)]
pub struct EstimateResponse {
    pub impressions: u64,
    pub reach: u64,
    pub cpm: f64,
}

/// POST /v1/targeting/estimate — what a budget buys at the platform CPM.
/// The campaign wizard shows this on the budget step.
pub async fn estimate(
    State(state): State<AppState>,
    Extension(_user): Extension<CurrentUser>,
    Json(req): Json<EstimateRequest>,
) -> Json<EstimateResponse> {
    let cpm = state.config.pricing.cpm;
    let impressions = estimate_impressions(req.budget, cpm);
    Json(EstimateResponse {
        impressions,
        reach: estimate_reach(impressions),
        cpm,
    })
}
