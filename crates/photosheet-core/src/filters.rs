//! Photo filter parameters.
//!
//! The seven filter parameters are modeled as a typed record rather than
//! an opaque platform string; [`FilterSettings::to_css`] produces the CSS
//! filter representation the rendering host needs.

/// The seven filter parameters, each clamped to its own range on merge.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FilterSettings {
    /// Brightness percentage (50 to 170)
    pub brightness: f64,
    /// Contrast percentage (50 to 170)
    pub contrast: f64,
    /// Saturation percentage (0 to 220)
    pub saturation: f64,
    /// Sepia percentage (0 to 100)
    pub sepia: f64,
    /// Grayscale percentage (0 to 100)
    pub grayscale: f64,
    /// Hue rotation in degrees (-180 to 180)
    pub hue: f64,
    /// Blur radius in pixels (0 to 4)
    pub blur: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        FilterPreset::None.settings()
    }
}

impl FilterSettings {
    /// Clamp every parameter into its documented range. `NaN` falls back
    /// to the neutral value for that parameter.
    pub fn clamped(&self) -> FilterSettings {
        let neutral = FilterSettings::default();
        FilterSettings {
            brightness: clamp_or(self.brightness, 50.0, 170.0, neutral.brightness),
            contrast: clamp_or(self.contrast, 50.0, 170.0, neutral.contrast),
            saturation: clamp_or(self.saturation, 0.0, 220.0, neutral.saturation),
            sepia: clamp_or(self.sepia, 0.0, 100.0, neutral.sepia),
            grayscale: clamp_or(self.grayscale, 0.0, 100.0, neutral.grayscale),
            hue: clamp_or(self.hue, -180.0, 180.0, neutral.hue),
            blur: clamp_or(self.blur, 0.0, 4.0, neutral.blur),
        }
    }

    /// CSS `filter` property value for these parameters.
    pub fn to_css(&self) -> String {
        format!(
            "brightness({}%) contrast({}%) saturate({}%) sepia({}%) grayscale({}%) hue-rotate({}deg) blur({}px)",
            self.brightness, self.contrast, self.saturation, self.sepia, self.grayscale, self.hue, self.blur
        )
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

/// Named filter presets. Selecting a preset overwrites all seven
/// parameters; manually editing any parameter switches to `Custom`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterPreset {
    #[default]
    None,
    Auto,
    Portrait,
    Landscape,
    Bw,
    Vintage,
    /// Manually edited parameters; has no preset table of its own.
    Custom,
}

impl FilterPreset {
    /// The parameter table this preset applies. `Custom` keeps whatever
    /// the user last edited, so it maps to the neutral table.
    pub fn settings(&self) -> FilterSettings {
        match self {
            FilterPreset::None | FilterPreset::Custom => FilterSettings {
                brightness: 100.0,
                contrast: 100.0,
                saturation: 100.0,
                sepia: 0.0,
                grayscale: 0.0,
                hue: 0.0,
                blur: 0.0,
            },
            FilterPreset::Auto => FilterSettings {
                brightness: 104.0,
                contrast: 108.0,
                saturation: 112.0,
                sepia: 0.0,
                grayscale: 0.0,
                hue: 0.0,
                blur: 0.0,
            },
            FilterPreset::Portrait => FilterSettings {
                brightness: 103.0,
                contrast: 104.0,
                saturation: 106.0,
                sepia: 16.0,
                grayscale: 0.0,
                hue: -8.0,
                blur: 0.0,
            },
            FilterPreset::Landscape => FilterSettings {
                brightness: 102.0,
                contrast: 114.0,
                saturation: 125.0,
                sepia: 0.0,
                grayscale: 0.0,
                hue: -3.0,
                blur: 0.0,
            },
            FilterPreset::Bw => FilterSettings {
                brightness: 102.0,
                contrast: 118.0,
                saturation: 40.0,
                sepia: 0.0,
                grayscale: 100.0,
                hue: 0.0,
                blur: 0.0,
            },
            FilterPreset::Vintage => FilterSettings {
                brightness: 96.0,
                contrast: 92.0,
                saturation: 86.0,
                sepia: 35.0,
                grayscale: 10.0,
                hue: -6.0,
                blur: 0.2,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        let f = FilterSettings::default();
        assert_eq!(f.brightness, 100.0);
        assert_eq!(f.contrast, 100.0);
        assert_eq!(f.saturation, 100.0);
        assert_eq!(f.sepia, 0.0);
        assert_eq!(f.grayscale, 0.0);
        assert_eq!(f.hue, 0.0);
        assert_eq!(f.blur, 0.0);
    }

    #[test]
    fn test_clamp_out_of_range() {
        let f = FilterSettings {
            brightness: 500.0,
            contrast: 0.0,
            saturation: -10.0,
            sepia: 150.0,
            grayscale: -1.0,
            hue: 400.0,
            blur: 9.0,
        }
        .clamped();
        assert_eq!(f.brightness, 170.0);
        assert_eq!(f.contrast, 50.0);
        assert_eq!(f.saturation, 0.0);
        assert_eq!(f.sepia, 100.0);
        assert_eq!(f.grayscale, 0.0);
        assert_eq!(f.hue, 180.0);
        assert_eq!(f.blur, 4.0);
    }

    #[test]
    fn test_clamp_nan_falls_back_to_neutral() {
        let mut f = FilterSettings::default();
        f.brightness = f64::NAN;
        f.blur = f64::NAN;
        let f = f.clamped();
        assert_eq!(f.brightness, 100.0);
        assert_eq!(f.blur, 0.0);
    }

    #[test]
    fn test_css_output() {
        let css = FilterSettings::default().to_css();
        assert_eq!(
            css,
            "brightness(100%) contrast(100%) saturate(100%) sepia(0%) grayscale(0%) hue-rotate(0deg) blur(0px)"
        );
    }

    #[test]
    fn test_vintage_preset_table() {
        let f = FilterPreset::Vintage.settings();
        assert_eq!(f.sepia, 35.0);
        assert_eq!(f.grayscale, 10.0);
        assert_eq!(f.hue, -6.0);
        assert_eq!(f.blur, 0.2);
    }

    #[test]
    fn test_bw_preset_table() {
        let f = FilterPreset::Bw.settings();
        assert_eq!(f.grayscale, 100.0);
        assert_eq!(f.saturation, 40.0);
    }

    #[test]
    fn test_all_preset_tables_within_range() {
        for preset in [
            FilterPreset::None,
            FilterPreset::Auto,
            FilterPreset::Portrait,
            FilterPreset::Landscape,
            FilterPreset::Bw,
            FilterPreset::Vintage,
        ] {
            let f = preset.settings();
            assert_eq!(f, f.clamped(), "preset table out of range: {preset:?}");
        }
    }
}
