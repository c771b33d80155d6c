//! Payment intent creation and the provider webhook callback.

use axum::extract::State;
use axum::{Extension, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use canopy_billing::{PaymentEvent, PaymentIntent};
use canopy_core::CanopyError;

use crate::auth::CurrentUser;
use crate::rest::{ApiError, AppState};

fn default_currency() -> String {
    "GBP".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    pub campaign_id: Uuid,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Serialize)]
pub struct CreateIntentResponse {
    pub payment_id: Uuid,
    pub client_secret: String,
}

/// POST /v1/payments/intent — create a confirmable payment for one of the
/// caller's campaigns.
pub async fn create_intent(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreateIntentRequest>,
) -> Result<Json<CreateIntentResponse>, ApiError> {
    // The campaign must exist and belong to the caller.
    state
        .stores
        .campaigns
        .get_for_user(req.campaign_id, user.0)
        .ok_or_else(|| ApiError(CanopyError::NotFound(format!("campaign {}", req.campaign_id))))?;

    let intent: PaymentIntent =
        state
            .payments
            .create_intent(req.campaign_id, user.0, req.amount, &req.currency)?;
    metrics::counter!("payments.intents_created").increment(1);

    Ok(Json(CreateIntentResponse {
        payment_id: intent.id,
        client_secret: intent.client_secret,
    }))
}

#[derive(Serialize)]
pub struct WebhookResponse {
    pub received: bool,
}

/// POST /v1/webhooks/payment — provider callback. Unauthenticated;
/// activates the campaign when a payment captures.
pub async fn payment_webhook(
    State(state): State<AppState>,
    Json(event): Json<PaymentEvent>,
) -> Result<Json<WebhookResponse>, ApiError> {
    if let Some(campaign_id) = state.payments.handle_event(event)? {
        state.stores.campaigns.activate(campaign_id, Utc::now())?;
        metrics::counter!("payments.captured").increment(1);
    }
    Ok(Json(WebhookResponse { received: true }))
}
