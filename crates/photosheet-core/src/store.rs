//! Crop state store.
//!
//! Owns the id-keyed crop map. Every mutation goes through the single
//! merge-and-clamp writer path, so a patch always reads the latest stored
//! value and the range invariants hold for every entry.
//!
//! Persistence is write-behind: mutations re-arm a coalescing window and
//! the pending snapshot becomes available once the window elapses, so a
//! drag burst produces one write rather than one per pointer move.
//! Timestamps are injected milliseconds from the host clock, which keeps
//! the store deterministic and usable from WASM.

use std::collections::HashMap;

use crate::{Crop, CropPatch};

/// Quiet window after the last mutation before a save is due.
pub const SAVE_DEBOUNCE_MS: f64 = 120.0;

/// Id-keyed crop map with lazy defaults and a coalescing save window.
#[derive(Debug, Default)]
pub struct CropStore {
    crops: HashMap<String, Crop>,
    last_mutation_ms: Option<f64>,
}

impl CropStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from the persistence collaborator's map.
    ///
    /// Stored values are re-clamped on the way in so a malformed entry
    /// can never violate the range invariants. Loading does not mark the
    /// store dirty.
    pub fn load(&mut self, crops: HashMap<String, Crop>) {
        self.crops = crops
            .into_iter()
            .map(|(id, crop)| (id, crop.sanitized()))
            .collect();
        self.last_mutation_ms = None;
    }

    /// The stored crop for `id`, or the default. Never mutates.
    pub fn get(&self, id: &str) -> Crop {
        self.crops.get(id).copied().unwrap_or_default()
    }

    /// Merge a patch over the current (or default) crop and store the
    /// clamped result. Re-arms the save window.
    pub fn set(&mut self, id: &str, patch: &CropPatch, now_ms: f64) -> Crop {
        let merged = self.get(id).merged(patch);
        self.crops.insert(id.to_string(), merged);
        self.last_mutation_ms = Some(now_ms);
        merged
    }

    /// Reset one crop back to the defaults.
    pub fn reset(&mut self, id: &str, now_ms: f64) -> Crop {
        self.crops.insert(id.to_string(), Crop::default());
        self.last_mutation_ms = Some(now_ms);
        Crop::default()
    }

    /// Reset every given id.
    pub fn reset_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>, now_ms: f64) {
        for id in ids {
            self.crops.insert(id.to_string(), Crop::default());
        }
        self.last_mutation_ms = Some(now_ms);
    }

    /// True while a mutation is waiting to be persisted.
    pub fn is_dirty(&self) -> bool {
        self.last_mutation_ms.is_some()
    }

    /// Current contents, id-keyed.
    pub fn snapshot(&self) -> &HashMap<String, Crop> {
        &self.crops
    }

    /// The coalesced snapshot, once the quiet window has elapsed.
    ///
    /// Returns `None` while the store is clean or a mutation landed less
    /// than [`SAVE_DEBOUNCE_MS`] ago. Taking the snapshot clears the
    /// dirty marker; only the latest state is ever handed out.
    pub fn take_pending_save(&mut self, now_ms: f64) -> Option<HashMap<String, Crop>> {
        let last = self.last_mutation_ms?;
        if now_ms - last < SAVE_DEBOUNCE_MS {
            return None;
        }
        self.last_mutation_ms = None;
        Some(self.crops.clone())
    }

    /// Final flush for teardown: the snapshot if anything is unsaved,
    /// regardless of the quiet window.
    pub fn flush(&mut self) -> Option<HashMap<String, Crop>> {
        self.last_mutation_ms.take().map(|_| self.crops.clone())
    }
}
