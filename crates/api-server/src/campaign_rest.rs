//! Owner-scoped campaign CRUD and metrics endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use uuid::Uuid;

use canopy_analytics::{metrics_for_campaign, SyntheticMetrics};
use canopy_core::types::Campaign;
use canopy_core::CanopyError;
use canopy_store::{CreateCampaignRequest, UpdateCampaignRequest};

use crate::auth::CurrentUser;
use crate::rest::{ApiError, AppState};

/// GET /v1/campaigns — the caller's campaigns, newest first.
pub async fn list_campaigns(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Json<Vec<Campaign>> {
    Json(state.stores.campaigns.list_for_user(user.0))
}

/// POST /v1/campaigns — create a draft campaign.
pub async fn create_campaign(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<Campaign>), ApiError> {
    let campaign = state.stores.campaigns.create(user.0, req)?;
    metrics::counter!("campaigns.created").increment(1);
    Ok((StatusCode::CREATED, Json(campaign)))
}

/// GET /v1/campaigns/{id} — owner-scoped read; a foreign campaign looks
/// like a missing one.
pub async fn get_campaign(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, ApiError> {
    state
        .stores
        .campaigns
        .get_for_user(id, user.0)
        .map(Json)
        .ok_or_else(|| ApiError(CanopyError::NotFound(format!("campaign {id}"))))
}

/// PUT /v1/campaigns/{id} — partial update.
pub async fn update_campaign(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCampaignRequest>,
) -> Result<Json<Campaign>, ApiError> {
    state
        .stores
        .campaigns
        .update_for_user(id, user.0, req)
        .map(Json)
        .ok_or_else(|| ApiError(CanopyError::NotFound(format!("campaign {id}"))))
}

/// DELETE /v1/campaigns/{id}
pub async fn delete_campaign(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.stores.campaigns.delete_for_user(id, user.0) {
        metrics::counter!("campaigns.deleted").increment(1);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError(CanopyError::NotFound(format!("campaign {id}"))))
    }
}

/// POST /v1/campaigns/{id}/pause
pub async fn pause_campaign(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, ApiError> {
    Ok(Json(state.stores.campaigns.pause_for_user(id, user.0)?))
}

/// POST /v1/campaigns/{id}/resume
pub async fn resume_campaign(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, ApiError> {
    Ok(Json(state.stores.campaigns.resume_for_user(id, user.0)?))
}

/// GET /v1/campaigns/{id}/metrics — delivery snapshot; synthetic backfill
/// while the campaign has no recorded spend.
pub async fn campaign_metrics(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<SyntheticMetrics>, ApiError> {
    let campaign = state
        .stores
        .campaigns
        .get_for_user(id, user.0)
        .ok_or_else(|| ApiError(CanopyError::NotFound(format!("campaign {id}"))))?;
    Ok(Json(metrics_for_campaign(&campaign)))
}
