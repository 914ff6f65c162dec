use crate::types::{ContrastResult, Rgb};

/// AA, normal text.
pub const NORMAL_AA: f64 = 4.5;
/// AAA, normal text.
pub const NORMAL_AAA: f64 = 7.0;
/// AA, large text (18pt+ or 14pt bold).
pub const LARGE_AA: f64 = 3.0;
/// AAA, large text.
pub const LARGE_AAA: f64 = 4.5;
/// AA, graphical objects and UI components.
pub const GRAPHICS_AA: f64 = 3.0;

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.1.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * srgb_to_linear(rgb.r) + 0.7152 * srgb_to_linear(rgb.g) + 0.0722 * srgb_to_linear(rgb.b)
}

/// Calculate WCAG 2.1 contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(c1: Rgb, c2: Rgb) -> f64 {
    let l1 = relative_luminance(c1);
    let l2 = relative_luminance(c2);
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

/// Determine pass/fail for all WCAG thresholds. Every threshold is inclusive.
pub fn check_wcag_thresholds(ratio: f64) -> ContrastResult {
    ContrastResult {
        ratio,
        normal_aa: ratio >= NORMAL_AA,
        normal_aaa: ratio >= NORMAL_AAA,
        large_aa: ratio >= LARGE_AA,
        large_aaa: ratio >= LARGE_AAA,
        graphics_aa: ratio >= GRAPHICS_AA,
    }
}
