//! Photosheet Core - A4 photo sheet layout engine
//!
//! This crate provides the core layout-and-transform functionality for
//! Photosheet: grid planning, pagination, per-photo crop state, transform
//! composition, and the interactive editing session.

pub mod filters;
pub mod geometry;
pub mod layout;
pub mod options;
pub mod render;
pub mod session;
pub mod store;
pub mod transform;

pub use filters::{FilterPreset, FilterSettings};
pub use geometry::{mm_to_px, preview_scale, Orientation, PageSize};
pub use layout::{paginate, plan, Cell, PageLayout, Template};
pub use options::{FilterParam, Options};
pub use render::{render, RenderError, RenderState};
pub use session::{Photo, Session};
pub use store::CropStore;
pub use transform::{compose, BarFill, CellTransform, FitMode};

/// Per-photo crop state: focal point, zoom, and rotation.
///
/// `x` and `y` are percentage focal-point coordinates within the source
/// photo (50/50 = untouched center). All fields are kept within their
/// ranges by the clamped merge; external code never mutates a stored
/// `Crop` directly.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Crop {
    /// Horizontal focal point (0 to 100)
    pub x: f64,
    /// Vertical focal point (0 to 100)
    pub y: f64,
    /// Zoom percentage (50 to 250, 100 = no zoom)
    pub zoom: f64,
    /// Rotation in degrees, normalized to [0, 360)
    pub rotation: f64,
}

impl Default for Crop {
    fn default() -> Self {
        Self {
            x: 50.0,
            y: 50.0,
            zoom: 100.0,
            rotation: 0.0,
        }
    }
}

impl Crop {
    /// Create a crop at the untouched center with no zoom or rotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Merge a patch over this crop, clamping every field into range.
    ///
    /// `x`/`y` clamp to [0, 100], `zoom` to [50, 250]; `rotation` is
    /// reduced into [0, 360) with sign correction so negative deltas wrap
    /// correctly. `NaN` patch fields fall back to the current value.
    pub fn merged(&self, patch: &CropPatch) -> Crop {
        Crop {
            x: pick(patch.x, self.x).clamp(0.0, 100.0),
            y: pick(patch.y, self.y).clamp(0.0, 100.0),
            zoom: pick(patch.zoom, self.zoom).clamp(50.0, 250.0),
            rotation: normalize_rotation(pick(patch.rotation, self.rotation)),
        }
    }

    /// Re-clamp a crop loaded from storage so malformed values cannot
    /// enter the store.
    pub fn sanitized(&self) -> Crop {
        Crop::default().merged(&CropPatch {
            x: Some(self.x),
            y: Some(self.y),
            zoom: Some(self.zoom),
            rotation: Some(self.rotation),
        })
    }
}

/// Partial update for a [`Crop`]. Absent fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub zoom: Option<f64>,
    pub rotation: Option<f64>,
}

impl CropPatch {
    /// Patch only the focal point.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch only the zoom.
    pub fn zoom(zoom: f64) -> Self {
        Self {
            zoom: Some(zoom),
            ..Self::default()
        }
    }

    /// Patch only the rotation.
    pub fn rotation(rotation: f64) -> Self {
        Self {
            rotation: Some(rotation),
            ..Self::default()
        }
    }
}

/// Reduce an angle into [0, 360), wrapping negative values upward.
fn normalize_rotation(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0) % 360.0
}

fn pick(patch: Option<f64>, current: f64) -> f64 {
    match patch {
        Some(v) if !v.is_nan() => v,
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_crop() {
        let crop = Crop::new();
        assert!(crop.is_default());
        assert_eq!(crop.x, 50.0);
        assert_eq!(crop.y, 50.0);
        assert_eq!(crop.zoom, 100.0);
        assert_eq!(crop.rotation, 0.0);
    }

    #[test]
    fn test_merge_clamps_position() {
        let crop = Crop::new().merged(&CropPatch::position(150.0, -20.0));
        assert_eq!(crop.x, 100.0);
        assert_eq!(crop.y, 0.0);
    }

    #[test]
    fn test_merge_clamps_zoom() {
        let crop = Crop::new().merged(&CropPatch::zoom(10_000.0));
        assert_eq!(crop.zoom, 250.0);
        let crop = Crop::new().merged(&CropPatch::zoom(0.0));
        assert_eq!(crop.zoom, 50.0);
    }

    #[test]
    fn test_negative_rotation_wraps() {
        let crop = Crop::new().merged(&CropPatch::rotation(-90.0));
        assert_eq!(crop.rotation, 270.0);
    }

    #[test]
    fn test_large_rotation_wraps() {
        let crop = Crop::new().merged(&CropPatch::rotation(720.0 + 45.0));
        assert_eq!(crop.rotation, 45.0);
    }

    #[test]
    fn test_nan_field_keeps_current() {
        let start = Crop::new().merged(&CropPatch::position(30.0, 60.0));
        let crop = start.merged(&CropPatch::position(f64::NAN, 70.0));
        assert_eq!(crop.x, 30.0);
        assert_eq!(crop.y, 70.0);
    }

    #[test]
    fn test_absent_fields_keep_current() {
        let start = Crop::new().merged(&CropPatch::zoom(180.0));
        let crop = start.merged(&CropPatch::position(10.0, 10.0));
        assert_eq!(crop.zoom, 180.0);
    }

    #[test]
    fn test_sanitize_malformed_stored_crop() {
        let stored = Crop {
            x: 400.0,
            y: f64::NAN,
            zoom: -5.0,
            rotation: -450.0,
        };
        let crop = stored.sanitized();
        assert_eq!(crop.x, 100.0);
        assert_eq!(crop.y, 50.0);
        assert_eq!(crop.zoom, 50.0);
        assert_eq!(crop.rotation, 270.0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
