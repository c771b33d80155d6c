//! Booking-capacity filter — excludes screens already at their concurrent
//! booking limit for a query window.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use canopy_core::types::{Booking, Screen};

use crate::geo::{is_geo_eligible, GeoQuery};

/// Concurrent bookings allowed per screen.
pub const MAX_BOOKINGS_PER_SCREEN: usize = 3;

/// Eligibility query: optional geo constraint plus a booking window.
///
/// With no explicit window the filter counts bookings that are currently or
/// future committed, i.e. whose half-open interval has not ended at `as_of`.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityQuery {
    pub geo: Option<GeoQuery>,
    pub window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    pub as_of: DateTime<Utc>,
}

impl EligibilityQuery {
    pub fn new(as_of: DateTime<Utc>) -> Self {
        Self {
            geo: None,
            window: None,
            as_of,
        }
    }

    pub fn with_geo(mut self, geo: GeoQuery) -> Self {
        self.geo = Some(geo);
        self
    }

    pub fn with_window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.window = Some((start, end));
        self
    }
}

/// Whether a booking counts against capacity for the query window. With no
/// window, a booking counts while its half-open interval has not ended.
fn counts_toward(
    booking: &Booking,
    window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    as_of: DateTime<Utc>,
) -> bool {
    match window {
        Some((start, end)) => booking.overlaps(start, end),
        None => booking.end_date > as_of,
    }
}

/// Number of bookings that count against capacity for the given window.
pub fn committed_count(
    bookings: &[Booking],
    window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    as_of: DateTime<Utc>,
) -> usize {
    bookings
        .iter()
        .filter(|b| counts_toward(b, window, as_of))
        .count()
}

/// Joint geo + capacity screen selection.
#[derive(Debug, Clone)]
pub struct ScreenSelector {
    max_bookings_per_screen: usize,
}

impl Default for ScreenSelector {
    fn default() -> Self {
        Self::new(MAX_BOOKINGS_PER_SCREEN)
    }
}

impl ScreenSelector {
    pub fn new(max_bookings_per_screen: usize) -> Self {
        Self {
            max_bookings_per_screen,
        }
    }

    /// Filter `screens` down to those that are Active, inside the geo bounds
    /// (when given), and below booking capacity for the query window.
    ///
    /// Input order is preserved; no ranking is implied. An empty result is a
    /// valid answer, never an error.
    pub fn eligible(
        &self,
        screens: &[Screen],
        bookings: &[Booking],
        query: &EligibilityQuery,
    ) -> Vec<Screen> {
        let mut by_screen: HashMap<Uuid, Vec<&Booking>> = HashMap::new();
        for booking in bookings {
            by_screen.entry(booking.screen_id).or_default().push(booking);
        }

        let eligible: Vec<Screen> = screens
            .iter()
            .filter(|screen| is_geo_eligible(screen, query.geo.as_ref()))
            .filter(|screen| {
                let committed = by_screen
                    .get(&screen.id)
                    .map(|bookings| {
                        bookings
                            .iter()
                            .filter(|b| counts_toward(b, query.window, query.as_of))
                            .count()
                    })
                    .unwrap_or(0);
                committed < self.max_bookings_per_screen
            })
            .cloned()
            .collect();

        debug!(
            candidates = screens.len(),
            eligible = eligible.len(),
            "screen eligibility computed"
        );

        eligible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_core::types::ScreenStatus;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, d, 0, 0, 0).unwrap()
    }

    fn screen(name: &str) -> Screen {
        Screen {
            id: Uuid::new_v4(),
            name: name.to_string(),
            location: "London".to_string(),
            latitude: 51.5074,
            longitude: -0.1276,
            width: 1920,
            height: 1080,
            resolution: "1920x1080".to_string(),
            status: ScreenStatus::Active,
            created_at: day(1),
        }
    }

    fn booking(screen_id: Uuid, start: DateTime<Utc>, end: DateTime<Utc>) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            campaign_id: Uuid::new_v4(),
            screen_id,
            start_date: start,
            end_date: end,
            created_at: start,
        }
    }

    #[test]
    fn screen_at_three_overlapping_bookings_is_excluded() {
        let s = screen("Oxford Street");
        let selector = ScreenSelector::default();
        let window = (day(10), day(20));

        let mut bookings = vec![
            booking(s.id, day(1), day(15)),
            booking(s.id, day(12), day(18)),
        ];
        let query = EligibilityQuery::new(day(5)).with_window(window.0, window.1);

        // Two overlapping bookings: still eligible.
        let eligible = selector.eligible(std::slice::from_ref(&s), &bookings, &query);
        assert_eq!(eligible.len(), 1);

        // Third overlapping booking hits the cap.
        bookings.push(booking(s.id, day(14), day(25)));
        let eligible = selector.eligible(std::slice::from_ref(&s), &bookings, &query);
        assert!(eligible.is_empty());
    }

    #[test]
    fn disjoint_bookings_do_not_stack() {
        let s = screen("Regent Street");
        let selector = ScreenSelector::default();

        // Three bookings on the same screen, but only one overlaps the
        // query window; the other two ended before it starts.
        let bookings = vec![
            booking(s.id, day(1), day(3)),
            booking(s.id, day(3), day(5)),
            booking(s.id, day(10), day(20)),
        ];
        let query = EligibilityQuery::new(day(1)).with_window(day(12), day(14));

        let eligible = selector.eligible(std::slice::from_ref(&s), &bookings, &query);
        assert_eq!(eligible.len(), 1);
    }

    #[test]
    fn default_window_ignores_expired_bookings() {
        let s = screen("Covent Garden");
        let selector = ScreenSelector::default();

        let bookings = vec![
            booking(s.id, day(1), day(5)),
            booking(s.id, day(1), day(6)),
            booking(s.id, day(1), day(7)),
        ];

        // All three committed as of day 2: fully booked.
        let query = EligibilityQuery::new(day(2));
        assert!(selector
            .eligible(std::slice::from_ref(&s), &bookings, &query)
            .is_empty());

        // As of day 6, two have ended (end_date <= now never counts).
        let query = EligibilityQuery::new(day(6));
        assert_eq!(
            selector
                .eligible(std::slice::from_ref(&s), &bookings, &query)
                .len(),
            1
        );
    }

    #[test]
    fn input_order_is_preserved() {
        let screens = vec![screen("A"), screen("B"), screen("C")];
        let selector = ScreenSelector::default();
        let query = EligibilityQuery::new(day(1));

        let eligible = selector.eligible(&screens, &[], &query);
        let names: Vec<&str> = eligible.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let selector = ScreenSelector::default();
        let query = EligibilityQuery::new(day(1)).with_geo(GeoQuery {
            latitude: 0.0,
            longitude: 0.0,
            radius_km: 1.0,
        });
        let eligible = selector.eligible(&[screen("London only")], &[], &query);
        assert!(eligible.is_empty());
    }
}
