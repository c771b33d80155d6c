//! Booking store. Bookings are grouped per screen so the capacity check
//! and the insert happen under one entry lock — an optimistic
//! check-then-write that keeps the "max concurrent bookings per screen"
//! invariant without a transaction.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use canopy_core::types::Booking;
use canopy_core::{CanopyError, CanopyResult};
use canopy_targeting::capacity::committed_count;

pub struct BookingStore {
    by_screen: DashMap<Uuid, Vec<Booking>>,
    max_per_screen: usize,
}

impl BookingStore {
    pub fn new(max_per_screen: usize) -> Self {
        Self {
            by_screen: DashMap::new(),
            max_per_screen,
        }
    }

    /// Book a screen for a campaign over `[start_date, end_date)`.
    ///
    /// Rejects with `Conflict` when the screen already carries the maximum
    /// number of bookings overlapping the requested interval. The count and
    /// the insert share the screen's entry lock, so two racing requests for
    /// the last slot cannot both succeed.
    pub fn create(
        &self,
        campaign_id: Uuid,
        screen_id: Uuid,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> CanopyResult<Booking> {
        if end_date <= start_date {
            return Err(CanopyError::InvalidInput(
                "booking end_date must be after start_date".to_string(),
            ));
        }

        let mut entry = self.by_screen.entry(screen_id).or_default();
        let committed = committed_count(entry.value(), Some((start_date, end_date)), Utc::now());
        if committed >= self.max_per_screen {
            return Err(CanopyError::Conflict(format!(
                "screen {screen_id} is fully booked for the requested dates"
            )));
        }

        let booking = Booking {
            id: Uuid::new_v4(),
            campaign_id,
            screen_id,
            start_date,
            end_date,
            created_at: Utc::now(),
        };
        entry.value_mut().push(booking.clone());
        info!(
            booking_id = %booking.id,
            campaign_id = %campaign_id,
            screen_id = %screen_id,
            "booking created"
        );
        Ok(booking)
    }

    pub fn list_for_screen(&self, screen_id: Uuid) -> Vec<Booking> {
        self.by_screen
            .get(&screen_id)
            .map(|r| r.value().clone())
            .unwrap_or_default()
    }

    /// Every booking across all screens. The eligibility filter takes the
    /// full set and groups internally.
    pub fn all(&self) -> Vec<Booking> {
        self.by_screen
            .iter()
            .flat_map(|r| r.value().clone())
            .collect()
    }
}
