//! Interactive editing session.
//!
//! The session is an explicit state machine over abstract input events:
//! select, drag-start, drag-move, drag-end, double-click reset, nudge, and
//! numeric zoom/rotation entry. The host UI translates its native pointer
//! and keyboard events into these calls; the machine guarantees at most
//! one drag at a time and silently drops events for stale photo ids.
//!
//! All mutations happen synchronously inside the triggering call and go
//! through the crop store's single merge-and-clamp path, so patches apply
//! in event order with no stale reads.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::options::Options;
use crate::store::CropStore;
use crate::{Crop, CropPatch};

/// One photo delivered by the folder collaborator. `id` is stable across
/// re-renders; `source` is an opaque handle the render host resolves.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Photo {
    pub id: String,
    pub name: String,
    pub source: String,
}

/// Ephemeral drag bookkeeping: where the pointer went down and what the
/// focal point was at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    origin_x: f64,
    origin_y: f64,
    start_x: f64,
    start_y: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum State {
    #[default]
    Idle,
    Selected(String),
    Dragging(String, DragSession),
}

/// The editing session: photos, options, crop state, and the interaction
/// state machine.
#[derive(Debug, Default)]
pub struct Session {
    photos: Vec<Photo>,
    options: Options,
    store: CropStore,
    state: State,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- folder lifecycle -----

    /// Replace the photo list from a folder selection.
    ///
    /// Photos are ordered by a case-insensitive, numeric-aware name sort
    /// so pagination order is deterministic for identical input sets.
    /// Selection and any in-flight drag are cleared when the selected id
    /// is no longer present; crop data is kept (it is keyed by id and may
    /// apply again when the folder comes back).
    pub fn set_photos(&mut self, mut photos: Vec<Photo>) {
        photos.sort_by(|a, b| natural_name_cmp(&a.name, &b.name).then_with(|| a.name.cmp(&b.name)));
        self.photos = photos;

        // The list changed under any in-flight drag; drop it either way.
        let next = match &self.state {
            State::Idle => State::Idle,
            State::Selected(id) | State::Dragging(id, _) => {
                if self.photos.iter().any(|p| &p.id == id) {
                    State::Selected(id.clone())
                } else {
                    State::Idle
                }
            }
        };
        self.state = next;
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    // ----- configuration and crop access -----

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    pub fn store(&self) -> &CropStore {
        &self.store
    }

    pub fn crop(&self, id: &str) -> Crop {
        self.store.get(id)
    }

    /// Seed crop state from the persistence collaborator.
    pub fn load_crops(&mut self, crops: HashMap<String, Crop>) {
        self.store.load(crops);
    }

    /// Coalesced snapshot for the debounced save, if due.
    pub fn take_pending_save(&mut self, now_ms: f64) -> Option<HashMap<String, Crop>> {
        self.store.take_pending_save(now_ms)
    }

    /// Teardown flush so the last burst of edits is never lost.
    pub fn flush(&mut self) -> Option<HashMap<String, Crop>> {
        self.store.flush()
    }

    // ----- selection -----

    /// The selected photo id, whether resting or mid-drag.
    pub fn selected_id(&self) -> Option<&str> {
        self.active_id()
    }

    pub fn selected_crop(&self) -> Option<Crop> {
        self.active_id().map(|id| self.store.get(id))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging(..))
    }

    /// Click on a cell with a photo. Switching to a different photo
    /// discards any prior drag; unknown ids are ignored.
    pub fn select(&mut self, id: &str) {
        if self.has_photo(id) {
            self.state = State::Selected(id.to_string());
        }
    }

    // ----- drag protocol -----

    /// Primary-button pointer-down on a cell with a photo: select it and
    /// open a drag session. Ignored while another drag is active.
    pub fn pointer_down(&mut self, id: &str, pointer_x: f64, pointer_y: f64) {
        if self.is_dragging() || !self.has_photo(id) {
            return;
        }
        let crop = self.store.get(id);
        self.state = State::Dragging(
            id.to_string(),
            DragSession {
                origin_x: pointer_x,
                origin_y: pointer_y,
                start_x: crop.x,
                start_y: crop.y,
            },
        );
    }

    /// Pointer movement during a drag. The focal point moves by the
    /// pointer delta expressed as a percentage of the cell size, applied
    /// to the position captured at drag start (clamping applies in the
    /// store). Moves for a non-matching id are stale and ignored.
    pub fn pointer_move(
        &mut self,
        id: &str,
        pointer_x: f64,
        pointer_y: f64,
        cell_width: f64,
        cell_height: f64,
        now_ms: f64,
    ) {
        let State::Dragging(drag_id, drag) = &self.state else {
            return;
        };
        if drag_id != id || cell_width <= 0.0 || cell_height <= 0.0 {
            return;
        }
        let x = drag.start_x + (pointer_x - drag.origin_x) / cell_width * 100.0;
        let y = drag.start_y + (pointer_y - drag.origin_y) / cell_height * 100.0;
        let id = drag_id.clone();
        self.store.set(&id, &CropPatch::position(x, y), now_ms);
    }

    /// Pointer-up or capture loss: the drag ends, selection remains.
    pub fn pointer_up(&mut self, id: &str) {
        if let State::Dragging(drag_id, _) = &self.state {
            if drag_id == id {
                self.state = State::Selected(drag_id.clone());
            }
        }
    }

    // ----- direct edits -----

    /// Double-click resets that cell's crop to the defaults; selection is
    /// untouched.
    pub fn double_click(&mut self, id: &str, now_ms: f64) {
        if self.has_photo(id) {
            self.store.reset(id, now_ms);
        }
    }

    /// Directional nudge by the configured step. Only valid while resting
    /// on a selection; a no-op while idle or dragging.
    pub fn nudge(&mut self, dir_x: f64, dir_y: f64, now_ms: f64) {
        let State::Selected(id) = &self.state else {
            return;
        };
        let id = id.clone();
        let step = self.options.nudge();
        let cur = self.store.get(&id);
        self.store.set(
            &id,
            &CropPatch::position(cur.x + dir_x * step, cur.y + dir_y * step),
            now_ms,
        );
    }

    /// Numeric zoom entry for the selected photo; the store coerces
    /// out-of-range or non-numeric values.
    pub fn set_zoom(&mut self, zoom: f64, now_ms: f64) {
        if let Some(id) = self.active_id().map(str::to_string) {
            self.store.set(&id, &CropPatch::zoom(zoom), now_ms);
        }
    }

    /// Numeric rotation entry for the selected photo.
    pub fn set_rotation(&mut self, rotation: f64, now_ms: f64) {
        if let Some(id) = self.active_id().map(str::to_string) {
            self.store.set(&id, &CropPatch::rotation(rotation), now_ms);
        }
    }

    /// Rotate the selected photo by a delta (the ±90° buttons).
    pub fn rotate_by(&mut self, delta_deg: f64, now_ms: f64) {
        if let Some(id) = self.active_id().map(str::to_string) {
            let cur = self.store.get(&id);
            self.store
                .set(&id, &CropPatch::rotation(cur.rotation + delta_deg), now_ms);
        }
    }

    /// Reset the crop of every photo in the current folder.
    pub fn reset_all_crops(&mut self, now_ms: f64) {
        let ids: Vec<String> = self.photos.iter().map(|p| p.id.clone()).collect();
        self.store
            .reset_all(ids.iter().map(String::as_str), now_ms);
    }

    // ----- helpers -----

    fn has_photo(&self, id: &str) -> bool {
        self.photos.iter().any(|p| p.id == id)
    }

    fn active_id(&self) -> Option<&str> {
        match &self.state {
            State::Idle => None,
            State::Selected(id) | State::Dragging(id, _) => Some(id),
        }
    }
}

/// Case-insensitive, numeric-aware name ordering.
///
/// Digit runs compare by numeric value ("img9" < "img10"); everything
/// else compares by lowercased characters. This matches the observable
/// ordering of typical camera filenames under a locale-aware collator.
pub fn natural_name_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();

    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ac), Some(bc)) if ac.is_ascii_digit() && bc.is_ascii_digit() => {
                let an = take_digit_run(&mut ai);
                let bn = take_digit_run(&mut bi);
                match cmp_digit_runs(&an, &bn) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
            (Some(ac), Some(bc)) => {
                match ac.to_lowercase().cmp(bc.to_lowercase()) {
                    Ordering::Equal => {
                        ai.next();
                        bi.next();
                    }
                    ord => return ord,
                }
            }
        }
    }
}

fn take_digit_run(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compare two digit runs by numeric value without parsing (runs may
/// exceed any integer width).
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
