//! Node-API exports consumed by the web front end.

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::config::CheckerConfig;
use crate::engine::ColorPairState;
use crate::math::{checker, color_parse, hex, suggest, wcag};
use crate::types::{ColorSuggestions, ContrastResult, Rgb};

/// `{ r, g, b }` as seen from JS. Channels above 255 are clamped.
#[napi(object)]
#[derive(Debug, Clone, Copy)]
pub struct JsRgb {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl From<JsRgb> for Rgb {
    fn from(c: JsRgb) -> Self {
        let clamp = |v: u32| v.min(255) as u8;
        Rgb::new(clamp(c.r), clamp(c.g), clamp(c.b))
    }
}

impl From<Rgb> for JsRgb {
    fn from(c: Rgb) -> Self {
        JsRgb { r: c.r as u32, g: c.g as u32, b: c.b as u32 }
    }
}

/// `ContrastResult` with the front end's key names.
#[napi(object)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsContrastResult {
    pub ratio: f64,
    #[napi(js_name = "normalAA")]
    pub normal_aa: bool,
    #[napi(js_name = "normalAAA")]
    pub normal_aaa: bool,
    #[napi(js_name = "largeAA")]
    pub large_aa: bool,
    #[napi(js_name = "largeAAA")]
    pub large_aaa: bool,
    #[napi(js_name = "graphicsAA")]
    pub graphics_aa: bool,
}

impl From<ContrastResult> for JsContrastResult {
    fn from(r: ContrastResult) -> Self {
        JsContrastResult {
            ratio: r.ratio,
            normal_aa: r.normal_aa,
            normal_aaa: r.normal_aaa,
            large_aa: r.large_aa,
            large_aaa: r.large_aaa,
            graphics_aa: r.graphics_aa,
        }
    }
}

#[napi(object)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsColorSuggestions {
    pub lighter_fg: String,
    pub darker_fg: String,
    pub lighter_bg: String,
    pub darker_bg: String,
}

impl From<ColorSuggestions> for JsColorSuggestions {
    fn from(s: ColorSuggestions) -> Self {
        JsColorSuggestions {
            lighter_fg: s.lighter_fg,
            darker_fg: s.darker_fg,
            lighter_bg: s.lighter_bg,
            darker_bg: s.darker_bg,
        }
    }
}

#[napi]
pub fn hex_to_rgb(hex: String) -> Option<JsRgb> {
    hex::hex_to_rgb(&hex).map(JsRgb::from)
}

#[napi]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    hex::rgb_to_hex(r, g, b)
}

#[napi]
pub fn is_valid_hex(hex: String) -> bool {
    hex::is_valid_hex(&hex)
}

#[napi]
pub fn normalize_hex(hex: String) -> Result<String> {
    Ok(hex::normalize_hex(&hex)?)
}

#[napi]
pub fn get_luminance(rgb: JsRgb) -> f64 {
    wcag::relative_luminance(rgb.into())
}

#[napi]
pub fn get_contrast_ratio(color1: JsRgb, color2: JsRgb) -> f64 {
    wcag::contrast_ratio(color1.into(), color2.into())
}

#[napi]
pub fn check_contrast(foreground: JsRgb, background: JsRgb) -> JsContrastResult {
    checker::check_contrast(foreground.into(), background.into()).into()
}

#[napi]
pub fn suggest_color_adjustment(
    foreground: JsRgb,
    background: JsRgb,
    target_ratio: Option<f64>,
) -> JsColorSuggestions {
    suggest::suggest_color_adjustment(
        foreground.into(),
        background.into(),
        target_ratio.unwrap_or(suggest::DEFAULT_TARGET_RATIO),
    )
    .into()
}

#[napi]
pub fn css_color_to_hex(value: String) -> Option<String> {
    color_parse::to_hex(&value)
}

/// Full report for the page's query string, as a JSON value.
/// Returns null when either seeded color is not a full hex value.
#[napi]
pub fn contrast_report(query: String, config_json: Option<String>) -> Result<Option<serde_json::Value>> {
    let config = match config_json {
        Some(json) => CheckerConfig::from_json_str(&json)?,
        None => CheckerConfig::default(),
    };
    let mut state = ColorPairState::new(&config);
    state.apply_query(&query);

    state
        .report(&config)
        .map(|report| serde_json::to_value(report).map_err(|e| Error::from_reason(e.to_string())))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_rgb_clamps_channels() {
        let rgb: Rgb = JsRgb { r: 300, g: 128, b: 0 }.into();
        assert_eq!(rgb, Rgb::new(255, 128, 0));
    }

    #[test]
    fn contrast_result_keeps_flags() {
        let result = JsContrastResult::from(checker::check_contrast(Rgb::new(0x77, 0x77, 0x77), Rgb::WHITE));
        assert!((result.ratio - 4.48).abs() < 0.01);
        assert!(!result.normal_aa);
        assert!(result.large_aa);
        assert!(result.graphics_aa);
    }

    #[test]
    fn suggestions_convert_field_by_field() {
        let s = JsColorSuggestions::from(suggest::suggest_color_adjustment(
            Rgb::new(0x77, 0x77, 0x77),
            Rgb::new(0x88, 0x88, 0x88),
            suggest::DEFAULT_TARGET_RATIO,
        ));
        assert_eq!(s.darker_fg, "#1D1D1D");
        assert_eq!(s.lighter_bg, "#FFFFFF");
    }
}
