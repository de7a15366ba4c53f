//! Page geometry and unit conversion.
//!
//! Millimeter-based A4 page math (source of truth) plus the CSS pixel
//! conversion used by the preview and print layers.

/// CSS reference pixel conversion (96 dpi / 25.4 mm per inch).
pub const MM_TO_PX: f64 = 3.7795275591;

/// A4 short edge in millimeters.
pub const A4_WIDTH_MM: f64 = 210.0;
/// A4 long edge in millimeters.
pub const A4_HEIGHT_MM: f64 = 297.0;

/// Minimum content-area edge after margins, in millimeters.
pub const MIN_CONTENT_MM: f64 = 10.0;

/// Horizontal padding reserved inside the preview container, in pixels.
const PREVIEW_PADDING_PX: f64 = 8.0;

/// Floor for the preview shrink factor so pages stay legible.
const MIN_PREVIEW_SCALE: f64 = 0.35;

/// Sheet orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Resolved page dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageSize {
    /// A4 dimensions for the given orientation.
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => Self {
                width_mm: A4_WIDTH_MM,
                height_mm: A4_HEIGHT_MM,
            },
            Orientation::Landscape => Self {
                width_mm: A4_HEIGHT_MM,
                height_mm: A4_WIDTH_MM,
            },
        }
    }

    /// Content area after subtracting the margin on all sides.
    ///
    /// Each axis is floored at [`MIN_CONTENT_MM`] so downstream grid math
    /// never divides by a degenerate dimension.
    pub fn content_size(&self, margin_mm: f64) -> (f64, f64) {
        (
            (self.width_mm - margin_mm * 2.0).max(MIN_CONTENT_MM),
            (self.height_mm - margin_mm * 2.0).max(MIN_CONTENT_MM),
        )
    }

    /// True when the margin leaves no printable area on the shorter edge.
    pub fn margin_too_large(&self, margin_mm: f64) -> bool {
        margin_mm * 2.0 >= self.width_mm.min(self.height_mm)
    }
}

/// Convert millimeters to whole CSS pixels.
pub fn mm_to_px(mm: f64) -> i32 {
    (mm * MM_TO_PX).round() as i32
}

/// Uniform shrink factor fitting a page into the preview container.
///
/// Returns `min(1, (container − padding) / page)` clamped to a floor of
/// 0.35. A container width of zero or less means the container has not
/// been measured yet and yields 1.
pub fn preview_scale(container_width_px: f64, page_width_px: f64) -> f64 {
    if container_width_px <= 0.0 || page_width_px <= 0.0 {
        return 1.0;
    }
    let fit = (container_width_px - PREVIEW_PADDING_PX) / page_width_px;
    fit.clamp(MIN_PREVIEW_SCALE, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_px_a4() {
        assert_eq!(mm_to_px(A4_WIDTH_MM), 794);
        assert_eq!(mm_to_px(A4_HEIGHT_MM), 1123);
    }

    #[test]
    fn test_orientation_swaps_edges() {
        let portrait = PageSize::for_orientation(Orientation::Portrait);
        let landscape = PageSize::for_orientation(Orientation::Landscape);
        assert_eq!(portrait.width_mm, landscape.height_mm);
        assert_eq!(portrait.height_mm, landscape.width_mm);
    }

    #[test]
    fn test_content_size_subtracts_margins() {
        let page = PageSize::for_orientation(Orientation::Portrait);
        let (w, h) = page.content_size(8.0);
        assert_eq!(w, 194.0);
        assert_eq!(h, 281.0);
    }

    #[test]
    fn test_content_size_floors_at_minimum() {
        let page = PageSize::for_orientation(Orientation::Portrait);
        let (w, h) = page.content_size(104.0);
        assert_eq!(w, MIN_CONTENT_MM);
        assert!(h >= MIN_CONTENT_MM);
    }

    #[test]
    fn test_margin_too_large() {
        let page = PageSize::for_orientation(Orientation::Portrait);
        assert!(!page.margin_too_large(40.0));
        assert!(page.margin_too_large(105.0));
    }

    #[test]
    fn test_preview_scale_wide_container() {
        // Container wider than the page never upscales.
        assert_eq!(preview_scale(2000.0, 794.0), 1.0);
    }

    #[test]
    fn test_preview_scale_narrow_container() {
        let scale = preview_scale(500.0, 794.0);
        assert!((scale - (492.0 / 794.0)).abs() < 1e-9);
    }

    #[test]
    fn test_preview_scale_floor() {
        assert_eq!(preview_scale(100.0, 794.0), 0.35);
    }

    #[test]
    fn test_preview_scale_unmeasured_container() {
        assert_eq!(preview_scale(0.0, 794.0), 1.0);
        assert_eq!(preview_scale(-5.0, 794.0), 1.0);
    }
}
