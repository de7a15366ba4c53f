//! String-typed option parsing for the JavaScript host.
//!
//! The host's form controls deliver plain strings; unknown values fall
//! back to the defaults rather than erroring, matching the engine's
//! degrade-instead-of-fail policy.

use photosheet_core::filters::FilterPreset;
use photosheet_core::options::FilterParam;
use photosheet_core::{BarFill, FitMode, Orientation, Template};

pub(crate) fn parse_orientation(value: &str) -> Orientation {
    match value {
        "landscape" => Orientation::Landscape,
        _ => Orientation::Portrait,
    }
}

pub(crate) fn parse_template(value: &str) -> Template {
    match value {
        "grid4" => Template::Grid4,
        "grid6" => Template::Grid6,
        "hero5" => Template::Hero5,
        _ => Template::Auto,
    }
}

pub(crate) fn parse_fit_mode(value: &str) -> FitMode {
    match value {
        "contain" => FitMode::Contain,
        _ => FitMode::Cover,
    }
}

pub(crate) fn parse_bar_fill(value: &str) -> BarFill {
    match value {
        "black" => BarFill::Black,
        "blur" => BarFill::Blur,
        _ => BarFill::White,
    }
}

pub(crate) fn parse_filter_preset(value: &str) -> FilterPreset {
    match value {
        "auto" => FilterPreset::Auto,
        "portrait" => FilterPreset::Portrait,
        "landscape" => FilterPreset::Landscape,
        "bw" => FilterPreset::Bw,
        "vintage" => FilterPreset::Vintage,
        "custom" => FilterPreset::Custom,
        _ => FilterPreset::None,
    }
}

pub(crate) fn parse_filter_param(value: &str) -> Option<FilterParam> {
    match value {
        "brightness" => Some(FilterParam::Brightness),
        "contrast" => Some(FilterParam::Contrast),
        "saturation" => Some(FilterParam::Saturation),
        "sepia" => Some(FilterParam::Sepia),
        "grayscale" => Some(FilterParam::Grayscale),
        "hue" => Some(FilterParam::Hue),
        "blur" => Some(FilterParam::Blur),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(parse_orientation("landscape"), Orientation::Landscape);
        assert_eq!(parse_template("hero5"), Template::Hero5);
        assert_eq!(parse_fit_mode("contain"), FitMode::Contain);
        assert_eq!(parse_bar_fill("blur"), BarFill::Blur);
        assert_eq!(parse_filter_preset("vintage"), FilterPreset::Vintage);
        assert_eq!(parse_filter_param("hue"), Some(FilterParam::Hue));
    }

    #[test]
    fn test_unknown_values_fall_back_to_defaults() {
        assert_eq!(parse_orientation("diagonal"), Orientation::Portrait);
        assert_eq!(parse_template("mosaic"), Template::Auto);
        assert_eq!(parse_fit_mode(""), FitMode::Cover);
        assert_eq!(parse_bar_fill("pink"), BarFill::White);
        assert_eq!(parse_filter_preset("sparkle"), FilterPreset::None);
        assert_eq!(parse_filter_param("sparkle"), None);
    }
}
