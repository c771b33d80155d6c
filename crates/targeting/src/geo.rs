//! Bounding-box geofilter for nearby screens.
//!
//! This is a rectangular approximation, not a geodesic circle: it
//! over-includes the corners of the box (a point up to ~radius*sqrt(2) away
//! on the diagonal can pass). Production would use PostGIS or a haversine
//! test; the box is kept for output compatibility with the existing
//! inventory API.

use canopy_core::types::{Screen, ScreenStatus};

/// Kilometres per degree of latitude. 1 degree is roughly 111 km.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Longitude scaling below this cosine is meaningless (|lat| ~ 90 degrees).
const MIN_COS_LAT: f64 = 1e-12;

/// A radius query around a center point, WGS84 degrees / kilometres.
#[derive(Debug, Clone, Copy)]
pub struct GeoQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

/// Inclusive lat/lng bounds derived from a [`GeoQuery`].
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    min_lat: f64,
    max_lat: f64,
    /// None at the poles, where the longitude span is unbounded and
    /// longitude filtering is disabled.
    lng_bounds: Option<(f64, f64)>,
}

impl BoundingBox {
    /// Build the box around a query.
    ///
    /// A negative radius yields inverted bounds, so nothing matches; a zero
    /// radius degenerates to the center point. Callers get an empty (or
    /// single-point) result rather than an error.
    pub fn around(query: &GeoQuery) -> Self {
        let lat_range = query.radius_km / KM_PER_DEGREE;

        let cos_lat = query.latitude.to_radians().cos();
        let lng_bounds = if cos_lat.abs() <= MIN_COS_LAT {
            None
        } else {
            let lng_range = query.radius_km / (KM_PER_DEGREE * cos_lat);
            if lng_range.is_finite() {
                Some((query.longitude - lng_range, query.longitude + lng_range))
            } else {
                None
            }
        };

        Self {
            min_lat: query.latitude - lat_range,
            max_lat: query.latitude + lat_range,
            lng_bounds,
        }
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        if latitude < self.min_lat || latitude > self.max_lat {
            return false;
        }
        match self.lng_bounds {
            Some((min_lng, max_lng)) => longitude >= min_lng && longitude <= max_lng,
            None => true,
        }
    }
}

/// Geo-eligibility predicate over screens. Status is checked first: only
/// Active screens are ever candidates. With no query, every Active screen
/// passes.
pub fn is_geo_eligible(screen: &Screen, query: Option<&GeoQuery>) -> bool {
    if screen.status != ScreenStatus::Active {
        return false;
    }
    match query {
        Some(q) => BoundingBox::around(q).contains(screen.latitude, screen.longitude),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_core::types::ScreenStatus;
    use chrono::Utc;
    use uuid::Uuid;

    fn screen(lat: f64, lng: f64, status: ScreenStatus) -> Screen {
        Screen {
            id: Uuid::new_v4(),
            name: "Test Screen".to_string(),
            location: "London".to_string(),
            latitude: lat,
            longitude: lng,
            width: 1920,
            height: 1080,
            resolution: "1920x1080".to_string(),
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn center_point_always_included() {
        for radius_km in [0.1, 1.0, 5.0, 100.0] {
            let query = GeoQuery {
                latitude: 51.5074,
                longitude: -0.1276,
                radius_km,
            };
            let s = screen(51.5074, -0.1276, ScreenStatus::Active);
            assert!(is_geo_eligible(&s, Some(&query)), "radius {radius_km}");
        }
    }

    #[test]
    fn inactive_screen_excluded_at_distance_zero() {
        let query = GeoQuery {
            latitude: 51.5074,
            longitude: -0.1276,
            radius_km: 5.0,
        };
        let s = screen(51.5074, -0.1276, ScreenStatus::Inactive);
        assert!(!is_geo_eligible(&s, Some(&query)));
    }

    #[test]
    fn far_screen_excluded() {
        let query = GeoQuery {
            latitude: 51.5074,
            longitude: -0.1276,
            radius_km: 1.0,
        };
        // Manchester is ~260 km away.
        let s = screen(53.4808, -2.2426, ScreenStatus::Active);
        assert!(!is_geo_eligible(&s, Some(&query)));
    }

    #[test]
    fn no_query_admits_all_active_screens() {
        let s = screen(53.4808, -2.2426, ScreenStatus::Active);
        assert!(is_geo_eligible(&s, None));
        let s = screen(53.4808, -2.2426, ScreenStatus::Inactive);
        assert!(!is_geo_eligible(&s, None));
    }

    // Regression fixture for the box approximation: the Oxford Street screen
    // sits ~1.1 km from the Trafalgar Square center, yet a 1 km query
    // includes it because both axes fall inside the box independently
    // (lat delta ~0.89 km, lng delta ~1.0 km). Over-inclusion is the
    // documented trade-off of the rectangular filter.
    #[test]
    fn bounding_box_over_includes_near_diagonal() {
        let query = GeoQuery {
            latitude: 51.5074,
            longitude: -0.1276,
            radius_km: 1.0,
        };
        let oxford_street = screen(51.5154, -0.1419, ScreenStatus::Active);
        assert!(is_geo_eligible(&oxford_street, Some(&query)));
    }

    #[test]
    fn negative_radius_matches_nothing() {
        let query = GeoQuery {
            latitude: 51.5074,
            longitude: -0.1276,
            radius_km: -1.0,
        };
        let s = screen(51.5074, -0.1276, ScreenStatus::Active);
        assert!(!is_geo_eligible(&s, Some(&query)));
    }

    #[test]
    fn zero_radius_degenerates_to_the_center_point() {
        let query = GeoQuery {
            latitude: 51.5074,
            longitude: -0.1276,
            radius_km: 0.0,
        };
        let at_center = screen(51.5074, -0.1276, ScreenStatus::Active);
        assert!(is_geo_eligible(&at_center, Some(&query)));
        let nearby = screen(51.5075, -0.1276, ScreenStatus::Active);
        assert!(!is_geo_eligible(&nearby, Some(&query)));
    }

    #[test]
    fn polar_center_disables_longitude_filtering() {
        let query = GeoQuery {
            latitude: 90.0,
            longitude: 0.0,
            radius_km: 10.0,
        };
        let bounds = BoundingBox::around(&query);
        // Any longitude passes; latitude band still applies.
        assert!(bounds.contains(89.95, 179.0));
        assert!(bounds.contains(89.95, -179.0));
        assert!(!bounds.contains(80.0, 0.0));
    }
}
