//! Public screen inventory endpoint.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use canopy_core::types::{Screen, ScreenStatus};
use canopy_targeting::capacity::EligibilityQuery;
use canopy_targeting::geo::GeoQuery;

use crate::rest::AppState;

/// Optional geo constraint. `radius_km` without coordinates is ignored;
/// coordinates without a radius use the configured default.
#[derive(Debug, Deserialize)]
pub struct ScreenQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius_km: Option<f64>,
}

/// GET /v1/screens — Active screens with booking capacity left, optionally
/// constrained to a radius around a point.
pub async fn list_screens(
    State(state): State<AppState>,
    Query(params): Query<ScreenQuery>,
) -> Json<Vec<Screen>> {
    let geo = match (params.lat, params.lng) {
        (Some(latitude), Some(longitude)) => Some(GeoQuery {
            latitude,
            longitude,
            radius_km: params
                .radius_km
                .unwrap_or(state.config.targeting.default_radius_km),
        }),
        _ => None,
    };

    let mut query = EligibilityQuery::new(Utc::now());
    if let Some(geo) = geo {
        query = query.with_geo(geo);
    }

    let screens = state.stores.screens.list_by_status(ScreenStatus::Active);
    let bookings = state.stores.bookings.all();
    let eligible = state.selector.eligible(&screens, &bookings, &query);

    metrics::counter!("screens.queries").increment(1);
    Json(eligible)
}
