use serde::{Deserialize, Serialize};

/// An opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        crate::math::hex::rgb_to_hex(self.r as f64, self.g as f64, self.b as f64)
    }
}

/// WCAG 2.1 verdict for one foreground/background pair.
///
/// Serialized keys match the front end's `ContrastResult` (`normalAA`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    pub ratio: f64,
    /// 4.5:1, normal text
    #[serde(rename = "normalAA")]
    pub normal_aa: bool,
    /// 7:1, normal text
    #[serde(rename = "normalAAA")]
    pub normal_aaa: bool,
    /// 3:1, large text (18pt+ or 14pt bold)
    #[serde(rename = "largeAA")]
    pub large_aa: bool,
    /// 4.5:1, large text
    #[serde(rename = "largeAAA")]
    pub large_aaa: bool,
    /// 3:1, graphical objects and UI components (WCAG 2.1 SC 1.4.11)
    #[serde(rename = "graphicsAA")]
    pub graphics_aa: bool,
}

impl ContrastResult {
    /// Share of the maximum 21:1 contrast, as a percentage capped at 100.
    pub fn percentage_of_max(&self) -> f64 {
        (self.ratio / 21.0 * 100.0).min(100.0)
    }
}

/// Output of the four greedy adjustment searches, as `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSuggestions {
    pub lighter_fg: String,
    pub darker_fg: String,
    pub lighter_bg: String,
    pub darker_bg: String,
}

/// Which color a suggestion moves, and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Adjustment {
    DarkenText,
    LightenText,
    DarkenBackground,
    LightenBackground,
}

impl Adjustment {
    pub fn label(self) -> &'static str {
        match self {
            Adjustment::DarkenText => "Darken text",
            Adjustment::LightenText => "Lighten text",
            Adjustment::DarkenBackground => "Darken background",
            Adjustment::LightenBackground => "Lighten background",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Adjustment::DarkenText => "Best for light backgrounds",
            Adjustment::LightenText => "Best for dark backgrounds",
            Adjustment::DarkenBackground | Adjustment::LightenBackground => {
                "Keeps the text color"
            }
        }
    }
}

/// A ready-to-apply color pair produced from [`ColorSuggestions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionOption {
    pub adjustment: Adjustment,
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    /// New ratio is strictly above the current one.
    pub improves: bool,
}

/// Overall rating shown next to the ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContrastQuality {
    Excellent,
    Good,
    Acceptable,
    Insufficient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComplianceCategory {
    NormalText,
    LargeText,
    Graphics,
}

/// One row of the compliance grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceBadge {
    pub category: ComplianceCategory,
    pub level: String,
    pub passed: bool,
    pub required_ratio: String,
}

/// Everything the front end renders for the current pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    pub foreground: String,
    pub background: String,
    pub result: ContrastResult,
    pub ratio_text: String,
    pub quality: ContrastQuality,
    pub percentage: f64,
    pub badges: Vec<ComplianceBadge>,
    /// Empty when normal-text AA already passes.
    pub suggestions: Vec<SuggestionOption>,
}

impl ContrastReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
