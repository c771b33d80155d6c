//! Screen inventory store. Screens are created by an operator/seed
//! process, mutated only through status changes, and never deleted in
//! normal operation.

use chrono::Utc;
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use canopy_core::types::{Screen, ScreenStatus};
use canopy_core::{CanopyError, CanopyResult};

pub struct ScreenStore {
    screens: DashMap<Uuid, Screen>,
}

/// A new screen registration from the operator tooling.
#[derive(Debug, Clone)]
pub struct NewScreen {
    pub name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub width: u32,
    pub height: u32,
    pub resolution: String,
}

impl ScreenStore {
    pub fn new() -> Self {
        Self {
            screens: DashMap::new(),
        }
    }

    /// Register a screen. Coordinates are validated here, at the write
    /// boundary, so every stored screen satisfies the WGS84 invariants.
    pub fn insert(&self, new: NewScreen) -> CanopyResult<Screen> {
        if !(-90.0..=90.0).contains(&new.latitude) {
            return Err(CanopyError::InvalidInput(format!(
                "latitude {} out of range [-90, 90]",
                new.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&new.longitude) {
            return Err(CanopyError::InvalidInput(format!(
                "longitude {} out of range [-180, 180]",
                new.longitude
            )));
        }

        let screen = Screen {
            id: Uuid::new_v4(),
            name: new.name,
            location: new.location,
            latitude: new.latitude,
            longitude: new.longitude,
            width: new.width,
            height: new.height,
            resolution: new.resolution,
            status: ScreenStatus::Active,
            created_at: Utc::now(),
        };
        info!(screen_id = %screen.id, name = %screen.name, "screen registered");
        self.screens.insert(screen.id, screen.clone());
        Ok(screen)
    }

    pub fn get(&self, id: Uuid) -> Option<Screen> {
        self.screens.get(&id).map(|r| r.value().clone())
    }

    /// All screens with the given status, ordered by name for stable output.
    pub fn list_by_status(&self, status: ScreenStatus) -> Vec<Screen> {
        let mut screens: Vec<Screen> = self
            .screens
            .iter()
            .filter(|r| r.value().status == status)
            .map(|r| r.value().clone())
            .collect();
        screens.sort_by(|a, b| a.name.cmp(&b.name));
        screens
    }

    pub fn set_status(&self, id: Uuid, status: ScreenStatus) -> CanopyResult<Screen> {
        let mut entry = self
            .screens
            .get_mut(&id)
            .ok_or_else(|| CanopyError::NotFound(format!("screen {id}")))?;
        entry.value_mut().status = status;
        Ok(entry.value().clone())
    }
}

impl Default for ScreenStore {
    fn default() -> Self {
        Self::new()
    }
}
