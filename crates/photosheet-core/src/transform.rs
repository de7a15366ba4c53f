//! Transform composition.
//!
//! Turns a crop state plus fit mode into the exact positioning values used
//! to paint a photo inside its cell. The focal point feeds the native
//! cover/contain anchor; a compensating half-magnitude translation keeps
//! the focal point visually stable as zoom grows, because the fit anchor
//! already shifts the visible window by the full delta. Composition order
//! is translate, then scale, then rotate, all about the element center:
//! the translation is expressed in percent of the unscaled box, so scaling
//! first would amplify the pan distance.

use crate::Crop;

/// Enlargement applied to the blurred backdrop copy so its edges never
/// show inside the cell.
pub const BACKDROP_SCALE: f64 = 1.15;

/// How a photo fills its cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Fill the cell, cropping overflow.
    #[default]
    Cover,
    /// Show the whole photo with letterbox bars.
    Contain,
}

/// What fills the letterbox bars in contain mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarFill {
    #[default]
    White,
    Black,
    /// A blurred, enlarged cover copy of the same photo.
    Blur,
}

/// Composed positioning values for one cell's photo.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CellTransform {
    /// Fit anchor, percent of the source photo.
    pub object_position_x: f64,
    pub object_position_y: f64,
    /// Compensating translation, percent of the unscaled box.
    pub translate_x: f64,
    pub translate_y: f64,
    /// Scale factor (zoom / 100).
    pub scale: f64,
    /// Rotation in degrees about the element center.
    pub rotate_deg: f64,
}

impl CellTransform {
    /// CSS `object-position` value.
    pub fn object_position(&self) -> String {
        format!("{}% {}%", self.object_position_x, self.object_position_y)
    }

    /// CSS `transform` value; order matters (see module docs).
    pub fn to_css(&self) -> String {
        format!(
            "translate({}%, {}%) scale({}) rotate({}deg)",
            self.translate_x, self.translate_y, self.scale, self.rotate_deg
        )
    }
}

/// Compose the positioning values for a crop.
///
/// The fit mode does not change the arithmetic; both modes share the
/// anchor-plus-compensation model. It is part of the signature because
/// the host pairs the result with the matching object-fit.
pub fn compose(crop: &Crop, _fit: FitMode) -> CellTransform {
    CellTransform {
        object_position_x: crop.x,
        object_position_y: crop.y,
        translate_x: (50.0 - crop.x) / 2.0,
        translate_y: (50.0 - crop.y) / 2.0,
        scale: crop.zoom / 100.0,
        rotate_deg: crop.rotation,
    }
}

/// True when the cell needs the blurred full-bleed backdrop beneath the
/// contained photo. The backdrop ignores the crop; only the foreground
/// uses the composed transform.
pub fn wants_blur_backdrop(fit: FitMode, bar_fill: BarFill) -> bool {
    fit == FitMode::Contain && bar_fill == BarFill::Blur
}
