//! The pin store: owns the collection, persists it, and derives views from it.
//!
//! One `PinStore` is built at startup from durable storage and handed to
//! whichever surface needs it. Every mutation writes the full collection back
//! under [`STORAGE_KEY`] before returning; an empty collection removes the key.

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::collections::HashSet;

use crate::db::KeyValueStore;
use crate::models::{Pin, StoredPin, SummaryStats};

/// Fixed namespace key the collection is stored under
pub const STORAGE_KEY: &str = "worldpins";

pub struct PinStore<S> {
    storage: Option<S>,
    pins: Vec<Pin>,
    last_issued: i64,
}

impl<S: KeyValueStore> PinStore<S> {
    /// Load the persisted collection. `None` means no storage backend is
    /// available: the store starts empty and writes are skipped.
    pub fn load(storage: Option<S>) -> Self {
        let (storage, pins) = match storage {
            Some(s) => match s.get_item(STORAGE_KEY) {
                Ok(Some(raw)) => match parse_pins(&raw) {
                    Some(pins) => (Some(s), pins),
                    // Same as an unreadable backend: keep the document intact
                    None => (None, Vec::new()),
                },
                Ok(None) => (Some(s), Vec::new()),
                Err(e) => {
                    // Don't keep a backend we can't read, or the next write
                    // would replace whatever it holds.
                    warn!("storage unavailable, starting with no pins: {e:#}");
                    (None, Vec::new())
                }
            },
            None => (None, Vec::new()),
        };

        let last_issued = pins
            .iter()
            .filter_map(|p| p.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);

        info!("loaded {} pins", pins.len());

        Self {
            storage,
            pins,
            last_issued,
        }
    }

    /// Pins in insertion order
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.id == id)
    }

    pub fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    /// Add a pin created now
    pub fn add(&mut self, lat: f64, lng: f64, label: &str) -> Result<Pin> {
        self.add_at(lat, lng, label, Utc::now())
    }

    /// Add a pin with an explicit creation time.
    ///
    /// Fails with [`crate::models::PinError`] when the trimmed label is empty
    /// or a coordinate is not finite; the collection is left unchanged.
    pub fn add_at(
        &mut self,
        lat: f64,
        lng: f64,
        label: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Pin> {
        let id = self.next_id(created_at);
        let pin = Pin::new(id.to_string(), lat, lng, label, created_at)?;

        let mut updated = self.pins.clone();
        updated.push(pin.clone());
        self.persist(&updated)?;

        self.pins = updated;
        self.last_issued = self.last_issued.max(id);
        debug!("added pin {} at {}, {}", pin.id, pin.lat, pin.lng);
        Ok(pin)
    }

    /// Remove every pin with this id. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Result<&[Pin]> {
        let updated: Vec<Pin> = self.pins.iter().filter(|p| p.id != id).cloned().collect();
        self.persist(&updated)?;

        if updated.len() != self.pins.len() {
            debug!("deleted pin {}", id);
        }
        self.pins = updated;
        Ok(&self.pins)
    }

    /// All pins, most recent first. Pins created at the same instant keep
    /// their insertion order. Call again to restart.
    pub fn list_sorted_by_recency(&self) -> impl Iterator<Item = &Pin> + Clone + '_ {
        let mut sorted: Vec<&Pin> = self.pins.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted.into_iter()
    }

    pub fn summary(&self, now: DateTime<Utc>) -> SummaryStats {
        SummaryStats::compute(&self.pins, now)
    }

    /// Millisecond wall-clock token, bumped past anything already issued or present.
    /// If the ids above run out at `i64::MAX`, falls back to the first free id
    /// from the current time upward.
    fn next_id(&self, now: DateTime<Utc>) -> i64 {
        let now_ms = now.timestamp_millis();
        let start = now_ms.max(self.last_issued.saturating_add(1));
        let taken = |candidate: i64| self.pins.iter().any(|p| p.id == candidate.to_string());

        (start..=i64::MAX)
            .chain(now_ms..start)
            .find(|&candidate| !taken(candidate))
            .unwrap_or(start)
    }

    fn persist(&self, pins: &[Pin]) -> Result<()> {
        let Some(storage) = &self.storage else {
            debug!("no storage backend, skipping write");
            return Ok(());
        };

        if pins.is_empty() {
            storage.remove_item(STORAGE_KEY)?;
            debug!("cleared stored pins");
            return Ok(());
        }

        let records: Vec<StoredPin> = pins.iter().map(StoredPin::from).collect();
        let json = serde_json::to_string(&records)?;
        storage.set_item(STORAGE_KEY, &json)?;
        debug!("persisted {} pins", records.len());
        Ok(())
    }
}

/// Decode the stored document. Records that fail to decode, and repeats of
/// an id already seen, are logged and dropped. `None` when the document is
/// not a JSON array at all.
fn parse_pins(raw: &str) -> Option<Vec<Pin>> {
    let records: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(e) => {
            warn!("stored pins are not a JSON array, leaving storage untouched: {e}");
            return None;
        }
    };

    let mut seen = HashSet::new();
    let mut pins = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let pin = serde_json::from_value::<StoredPin>(record)
            .map_err(anyhow::Error::from)
            .and_then(Pin::try_from);

        match pin {
            Ok(pin) if seen.contains(&pin.id) => {
                warn!("dropping stored pin #{index}: duplicate id {}", pin.id);
            }
            Ok(pin) => {
                seen.insert(pin.id.clone());
                pins.push(pin);
            }
            Err(e) => warn!("dropping stored pin #{index}: {e:#}"),
        }
    }

    Some(pins)
}
