//! The configuration surface.
//!
//! Process-lifetime UI state governing page derivation, spacing, fit, bar
//! fill, filters, and the nudge step. Raw values are kept as entered;
//! accessors clamp on the way out so an out-of-range field degrades to the
//! nearest valid value instead of failing (crop data is the only state
//! that persists, so none of this is saved).

use crate::filters::{FilterPreset, FilterSettings};
use crate::geometry::{Orientation, PageSize};
use crate::layout::Template;
use crate::transform::{BarFill, FitMode};

/// Default nudge step in focal-point percent.
const DEFAULT_NUDGE_STEP: f64 = 2.0;

/// Selector for one of the seven filter parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterParam {
    Brightness,
    Contrast,
    Saturation,
    Sepia,
    Grayscale,
    Hue,
    Blur,
}

/// The configuration bag.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Options {
    /// Requested photos per page; ignored when the template forces a count.
    pub photos_per_page: u32,
    pub orientation: Orientation,
    pub margin_mm: f64,
    pub gap_mm: f64,
    pub template: Template,
    pub fit_mode: FitMode,
    pub bar_fill: BarFill,
    pub show_labels: bool,
    pub show_separators: bool,
    pub filter_preset: FilterPreset,
    pub filters: FilterSettings,
    pub nudge_step: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            photos_per_page: 6,
            orientation: Orientation::Portrait,
            margin_mm: 8.0,
            gap_mm: 3.0,
            template: Template::Auto,
            fit_mode: FitMode::Cover,
            bar_fill: BarFill::White,
            show_labels: false,
            show_separators: true,
            filter_preset: FilterPreset::None,
            filters: FilterSettings::default(),
            nudge_step: DEFAULT_NUDGE_STEP,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Photos per page after template forcing and the 1..=64 clamp.
    pub fn effective_photos_per_page(&self) -> u32 {
        self.template
            .forced_photos_per_page()
            .unwrap_or_else(|| self.photos_per_page.clamp(1, 64))
    }

    /// Margin clamped to 0..=40 mm.
    pub fn margin(&self) -> f64 {
        clamp_or(self.margin_mm, 0.0, 40.0, 0.0)
    }

    /// Gap clamped to 0..=20 mm.
    pub fn gap(&self) -> f64 {
        clamp_or(self.gap_mm, 0.0, 20.0, 0.0)
    }

    /// Nudge step clamped to 0.5..=20 percent.
    pub fn nudge(&self) -> f64 {
        clamp_or(self.nudge_step, 0.5, 20.0, DEFAULT_NUDGE_STEP)
    }

    /// Page dimensions for the configured orientation.
    pub fn page_size(&self) -> PageSize {
        PageSize::for_orientation(self.orientation)
    }

    /// True when the margin as entered leaves no printable area. Checked
    /// against the raw value: the clamped margin feeds the layout math,
    /// but the advisory must fire on what the user typed.
    pub fn margin_too_large(&self) -> bool {
        self.page_size().margin_too_large(self.margin_mm)
    }

    /// Filter parameters with every field clamped into range.
    pub fn effective_filters(&self) -> FilterSettings {
        self.filters.clamped()
    }

    /// Select a preset, overwriting all seven filter parameters.
    /// `Custom` has no table and only switches the tag.
    pub fn apply_preset(&mut self, preset: FilterPreset) {
        self.filter_preset = preset;
        if preset != FilterPreset::Custom {
            self.filters = preset.settings();
        }
    }

    /// Edit a single filter parameter; forces the preset to `Custom`.
    pub fn set_filter(&mut self, param: FilterParam, value: f64) {
        match param {
            FilterParam::Brightness => self.filters.brightness = value,
            FilterParam::Contrast => self.filters.contrast = value,
            FilterParam::Saturation => self.filters.saturation = value,
            FilterParam::Sepia => self.filters.sepia = value,
            FilterParam::Grayscale => self.filters.grayscale = value,
            FilterParam::Hue => self.filters.hue = value,
            FilterParam::Blur => self.filters.blur = value,
        }
        self.filters = self.filters.clamped();
        self.filter_preset = FilterPreset::Custom;
    }

    /// Back to the neutral preset and table.
    pub fn reset_filters(&mut self) {
        self.apply_preset(FilterPreset::None);
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
