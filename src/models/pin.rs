use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::region::{region_info, Region, RegionInfo};

/// Rejections raised when creating a pin
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PinError {
    #[error("Label cannot be empty.")]
    EmptyLabel,
    #[error("Invalid coordinates: {lat}, {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },
}

/// A saved location. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

impl Pin {
    /// Build a pin from a confirmed map click.
    ///
    /// The label is trimmed and must not be empty afterwards. The timestamp is
    /// truncated to millisecond precision so it survives persistence exactly.
    pub fn new(
        id: String,
        lat: f64,
        lng: f64,
        label: &str,
        created_at: DateTime<Utc>,
    ) -> std::result::Result<Self, PinError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(PinError::EmptyLabel);
        }
        if !lat.is_finite() || !lng.is_finite() {
            return Err(PinError::InvalidCoordinate { lat, lng });
        }

        Ok(Self {
            id,
            lat,
            lng,
            label: label.to_string(),
            created_at: created_at.trunc_subsecs(3),
        })
    }

    pub fn region(&self) -> Option<Region> {
        Region::classify(self.lat, self.lng)
    }

    /// Region name and icon for the pin list ("Ocean" when unmatched)
    pub fn region_info(&self) -> RegionInfo {
        region_info(self.lat, self.lng)
    }

    /// Whether the coordinates fall within the valid lat/lng ranges.
    /// Out-of-range pins are still stored.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Persisted form of a pin, one element of the JSON array under the storage key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPin {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub label: String,
    pub timestamp: String,
}

impl From<&Pin> for StoredPin {
    fn from(pin: &Pin) -> Self {
        Self {
            id: pin.id.clone(),
            lat: pin.lat,
            lng: pin.lng,
            label: pin.label.clone(),
            timestamp: pin.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl TryFrom<StoredPin> for Pin {
    type Error = anyhow::Error;

    fn try_from(stored: StoredPin) -> Result<Self> {
        let created_at = DateTime::parse_from_rfc3339(&stored.timestamp)
            .with_context(|| format!("invalid timestamp '{}'", stored.timestamp))?
            .with_timezone(&Utc);

        Pin::new(stored.id.clone(), stored.lat, stored.lng, &stored.label, created_at)
            .map_err(|e| anyhow!("pin {}: {}", stored.id, e))
    }
}
