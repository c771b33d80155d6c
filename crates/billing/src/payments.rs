//! Payment intents and capture events.
//!
//! An intent is an opaque, client-confirmable handle: the browser confirms
//! it directly with the payment provider, which then reports the outcome
//! through a webhook-style callback. The engine records the outcome and
//! tells the caller which campaign to activate; the campaign write itself
//! belongs to the campaign store.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use canopy_core::{CanopyError, CanopyResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

/// A payment attached to a campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    /// Opaque handle the browser uses to confirm the payment with the
    /// provider. Never logged.
    pub client_secret: String,
    pub created_at: DateTime<Utc>,
}

/// Webhook-style event from the payment provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentEvent {
    PaymentSucceeded { payment_id: Uuid },
    PaymentFailed { payment_id: Uuid },
}

pub struct PaymentEngine {
    payments: DashMap<Uuid, PaymentIntent>,
}

impl PaymentEngine {
    pub fn new() -> Self {
        Self {
            payments: DashMap::new(),
        }
    }

    pub fn create_intent(
        &self,
        campaign_id: Uuid,
        user_id: Uuid,
        amount: f64,
        currency: &str,
    ) -> CanopyResult<PaymentIntent> {
        if amount <= 0.0 {
            return Err(CanopyError::InvalidInput(
                "payment amount must be positive".to_string(),
            ));
        }

        let intent = PaymentIntent {
            id: Uuid::new_v4(),
            campaign_id,
            user_id,
            amount,
            currency: currency.to_uppercase(),
            status: PaymentStatus::Pending,
            client_secret: generate_client_secret(),
            created_at: Utc::now(),
        };
        info!(
            payment_id = %intent.id,
            campaign_id = %campaign_id,
            amount,
            currency = %intent.currency,
            "payment intent created"
        );
        self.payments.insert(intent.id, intent.clone());
        Ok(intent)
    }

    pub fn get(&self, id: Uuid) -> Option<PaymentIntent> {
        self.payments.get(&id).map(|r| r.value().clone())
    }

    pub fn list_for_campaign(&self, campaign_id: Uuid) -> Vec<PaymentIntent> {
        let mut payments: Vec<PaymentIntent> = self
            .payments
            .iter()
            .filter(|r| r.value().campaign_id == campaign_id)
            .map(|r| r.value().clone())
            .collect();
        payments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        payments
    }

    /// Apply a provider event. On success, returns the campaign that
    /// should be activated; failures just mark the payment.
    pub fn handle_event(&self, event: PaymentEvent) -> CanopyResult<Option<Uuid>> {
        match event {
            PaymentEvent::PaymentSucceeded { payment_id } => {
                let mut entry = self
                    .payments
                    .get_mut(&payment_id)
                    .ok_or_else(|| CanopyError::NotFound(format!("payment {payment_id}")))?;
                let payment = entry.value_mut();
                payment.status = PaymentStatus::Completed;
                info!(payment_id = %payment_id, campaign_id = %payment.campaign_id, "payment captured");
                Ok(Some(payment.campaign_id))
            }
            PaymentEvent::PaymentFailed { payment_id } => {
                let mut entry = self
                    .payments
                    .get_mut(&payment_id)
                    .ok_or_else(|| CanopyError::NotFound(format!("payment {payment_id}")))?;
                entry.value_mut().status = PaymentStatus::Failed;
                warn!(payment_id = %payment_id, "payment failed");
                Ok(None)
            }
        }
    }
}

impl Default for PaymentEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_client_secret() -> String {
    let mut rng = rand::thread_rng();
    let bytes: [u8; 24] = rng.gen();
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("pi_secret_{hex}")
}
