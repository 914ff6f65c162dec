use crate::types::{ComplianceBadge, ComplianceCategory, ContrastQuality, ContrastResult, Rgb};

use super::wcag;

/// Check contrast for a single foreground/background pair.
///
/// The ratio is kept unrounded; use [`format_ratio`] for display.
pub fn check_contrast(fg: Rgb, bg: Rgb) -> ContrastResult {
    let ratio = wcag::contrast_ratio(fg, bg);
    wcag::check_wcag_thresholds(ratio)
}

/// Ratio as shown next to `:1`, two decimals.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}", ratio)
}

impl ContrastQuality {
    pub fn from_result(result: &ContrastResult) -> Self {
        if result.normal_aaa {
            ContrastQuality::Excellent
        } else if result.normal_aa {
            ContrastQuality::Good
        } else if result.large_aa {
            ContrastQuality::Acceptable
        } else {
            ContrastQuality::Insufficient
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContrastQuality::Excellent => "Excellent",
            ContrastQuality::Good => "Good",
            ContrastQuality::Acceptable => "Acceptable",
            ContrastQuality::Insufficient => "Insufficient",
        }
    }
}

fn required(threshold: f64) -> String {
    // 7.0 -> "7:1", 4.5 -> "4.5:1"
    format!("{}:1", threshold)
}

/// Compliance grid rows: normal AA/AAA, large AA/AAA, then graphics AA.
pub fn compliance_badges(result: &ContrastResult) -> Vec<ComplianceBadge> {
    let rows = [
        (ComplianceCategory::NormalText, "AA", result.normal_aa, wcag::NORMAL_AA),
        (ComplianceCategory::NormalText, "AAA", result.normal_aaa, wcag::NORMAL_AAA),
        (ComplianceCategory::LargeText, "AA", result.large_aa, wcag::LARGE_AA),
        (ComplianceCategory::LargeText, "AAA", result.large_aaa, wcag::LARGE_AAA),
        (ComplianceCategory::Graphics, "WCAG 2.1 AA", result.graphics_aa, wcag::GRAPHICS_AA),
    ];

    rows.into_iter()
        .map(|(category, level, passed, threshold)| ComplianceBadge {
            category,
            level: level.to_string(),
            passed,
            required_ratio: required(threshold),
        })
        .collect()
}
