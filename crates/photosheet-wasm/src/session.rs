//! Editing session bindings.
//!
//! Wraps the core [`photosheet_core::Session`] for JavaScript. The host
//! forwards its pointer/keyboard/form events through these methods and
//! reads back the render-state snapshot; timestamps are host milliseconds
//! (`performance.now()`), which drive the coalesced crop persistence.

use photosheet_core::session::Photo;
use photosheet_core::{preview_scale as core_preview_scale, render, Crop};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

use crate::options::{
    parse_bar_fill, parse_filter_param, parse_filter_preset, parse_fit_mode, parse_orientation,
    parse_template,
};

/// Serialize through the JSON-compatible serializer so snapshots are
/// plain objects the host can hand to `JSON.stringify` or `localStorage`.
fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Editing session wrapper for JavaScript.
#[wasm_bindgen]
pub struct Session {
    inner: photosheet_core::Session,
}

#[wasm_bindgen]
impl Session {
    /// Create an empty session with default options.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: photosheet_core::Session::new(),
        }
    }

    // ----- folder lifecycle -----

    /// Replace the photo list: an array of `{id, name, source}` objects.
    /// The engine sorts them by natural name order.
    pub fn set_photos(&mut self, photos: js_sys::Array) -> Result<(), JsValue> {
        let photos: Vec<Photo> = serde_wasm_bindgen::from_value(photos.into())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.set_photos(photos);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn photo_count(&self) -> usize {
        self.inner.photo_count()
    }

    // ----- persistence collaborator -----

    /// Seed crop state from storage: an `{id: crop}` object. Malformed
    /// storage is ignored with a console warning; the photos start from
    /// default crops instead of failing.
    pub fn load_crops(&mut self, crops: JsValue) {
        match serde_wasm_bindgen::from_value::<HashMap<String, Crop>>(crops) {
            Ok(crops) => self.inner.load_crops(crops),
            Err(e) => web_sys::console::warn_1(&JsValue::from_str(&format!(
                "photosheet: ignoring malformed crop storage: {e}"
            ))),
        }
    }

    /// The coalesced crop snapshot once the debounce window has elapsed,
    /// or `undefined`. The host polls this from its timer and writes the
    /// result to storage.
    pub fn take_pending_save(&mut self, now_ms: f64) -> Result<JsValue, JsValue> {
        match self.inner.take_pending_save(now_ms) {
            Some(snapshot) => to_js(&snapshot),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Teardown flush: any unsaved snapshot regardless of the window,
    /// or `undefined`. Call before the page unloads.
    pub fn flush(&mut self) -> Result<JsValue, JsValue> {
        match self.inner.flush() {
            Some(snapshot) => to_js(&snapshot),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    // ----- interaction events -----

    pub fn select(&mut self, id: &str) {
        self.inner.select(id);
    }

    pub fn pointer_down(&mut self, id: &str, pointer_x: f64, pointer_y: f64) {
        self.inner.pointer_down(id, pointer_x, pointer_y);
    }

    pub fn pointer_move(
        &mut self,
        id: &str,
        pointer_x: f64,
        pointer_y: f64,
        cell_width: f64,
        cell_height: f64,
        now_ms: f64,
    ) {
        self.inner
            .pointer_move(id, pointer_x, pointer_y, cell_width, cell_height, now_ms);
    }

    pub fn pointer_up(&mut self, id: &str) {
        self.inner.pointer_up(id);
    }

    pub fn double_click(&mut self, id: &str, now_ms: f64) {
        self.inner.double_click(id, now_ms);
    }

    pub fn nudge(&mut self, dir_x: f64, dir_y: f64, now_ms: f64) {
        self.inner.nudge(dir_x, dir_y, now_ms);
    }

    pub fn set_zoom(&mut self, zoom: f64, now_ms: f64) {
        self.inner.set_zoom(zoom, now_ms);
    }

    pub fn set_rotation(&mut self, rotation: f64, now_ms: f64) {
        self.inner.set_rotation(rotation, now_ms);
    }

    pub fn rotate_by(&mut self, delta_deg: f64, now_ms: f64) {
        self.inner.rotate_by(delta_deg, now_ms);
    }

    pub fn reset_all_crops(&mut self, now_ms: f64) {
        self.inner.reset_all_crops(now_ms);
    }

    #[wasm_bindgen(getter)]
    pub fn selected_id(&self) -> Option<String> {
        self.inner.selected_id().map(str::to_string)
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// The selected photo's crop, or `undefined`.
    pub fn selected_crop(&self) -> Result<JsValue, JsValue> {
        match self.inner.selected_crop() {
            Some(crop) => to_js(&crop),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    // ----- configuration -----

    pub fn set_photos_per_page(&mut self, count: u32) {
        self.inner.options_mut().photos_per_page = count;
    }

    pub fn set_orientation(&mut self, value: &str) {
        self.inner.options_mut().orientation = parse_orientation(value);
    }

    pub fn set_margin_mm(&mut self, value: f64) {
        self.inner.options_mut().margin_mm = value;
    }

    pub fn set_gap_mm(&mut self, value: f64) {
        self.inner.options_mut().gap_mm = value;
    }

    pub fn set_template(&mut self, value: &str) {
        self.inner.options_mut().template = parse_template(value);
    }

    pub fn set_fit_mode(&mut self, value: &str) {
        self.inner.options_mut().fit_mode = parse_fit_mode(value);
    }

    pub fn set_bar_fill(&mut self, value: &str) {
        self.inner.options_mut().bar_fill = parse_bar_fill(value);
    }

    pub fn set_show_labels(&mut self, value: bool) {
        self.inner.options_mut().show_labels = value;
    }

    pub fn set_show_separators(&mut self, value: bool) {
        self.inner.options_mut().show_separators = value;
    }

    pub fn set_nudge_step(&mut self, value: f64) {
        self.inner.options_mut().nudge_step = value;
    }

    /// Apply a filter preset by name, overwriting all seven parameters.
    pub fn apply_filter_preset(&mut self, name: &str) {
        self.inner
            .options_mut()
            .apply_preset(parse_filter_preset(name));
    }

    /// Edit a single filter parameter by name; unknown names are ignored,
    /// known ones force the preset to custom.
    pub fn set_filter(&mut self, name: &str, value: f64) {
        if let Some(param) = parse_filter_param(name) {
            self.inner.options_mut().set_filter(param, value);
        }
    }

    pub fn reset_filters(&mut self) {
        self.inner.options_mut().reset_filters();
    }

    // ----- rendering -----

    /// The current render-state snapshot. Throws only for the
    /// margin-too-large advisory; the host shows the message until the
    /// margin is corrected.
    pub fn render_state(&self) -> Result<JsValue, JsValue> {
        let state = render(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&state)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Direct access for Rust-side callers and tests.
    pub fn inner(&self) -> &photosheet_core::Session {
        &self.inner
    }

    /// Non-JS photo handoff used by tests and native hosts.
    pub fn set_photos_vec(&mut self, photos: Vec<Photo>) {
        self.inner.set_photos(photos);
    }
}

/// Uniform shrink factor fitting a page into the preview container.
#[wasm_bindgen]
pub fn preview_scale(container_width_px: f64, page_width_px: f64) -> f64 {
    core_preview_scale(container_width_px, page_width_px)
}
