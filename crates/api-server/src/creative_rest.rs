//! Creative generation endpoint.

use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;

use canopy_core::types::{AdCreative, BusinessCategory};
use canopy_creative::CreativeRequest;

use crate::auth::CurrentUser;
use crate::rest::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateCreativeRequest {
    #[serde(default)]
    pub prompt: String,
    pub business_category: BusinessCategory,
}

/// POST /v1/creative/generate — always returns a creative; provider
/// unavailability degrades to the category template.
pub async fn generate_creative(
    State(state): State<AppState>,
    Extension(_user): Extension<CurrentUser>,
    Json(req): Json<GenerateCreativeRequest>,
) -> Json<AdCreative> {
    let creative = state
        .studio
        .generate(&CreativeRequest {
            prompt: req.prompt,
            business_category: req.business_category,
        })
        .await;
    metrics::counter!("creative.generated").increment(1);
    Json(creative)
}
