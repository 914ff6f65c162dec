use crate::error::{ColorError, Result};
use crate::types::Rgb;

fn is_hex_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a 6-digit hex string (optional `#`, any case) to RGB channels.
/// Returns None for anything else, including 3-digit shorthand.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    // from_str_radix alone would accept a leading '+'
    if hex.len() != 6 || !is_hex_digits(hex) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

/// Format channels as `#RRGGBB`.
/// Each channel is clamped to 0-255 and rounded to the nearest integer first.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    let channel = |v: f64| -> u8 { v.clamp(0.0, 255.0).round() as u8 };
    format!("#{:02X}{:02X}{:02X}", channel(r), channel(g), channel(b))
}

/// `#?` followed by exactly 3 or 6 hex digits.
pub fn is_valid_hex(hex: &str) -> bool {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    matches!(raw.len(), 3 | 6) && is_hex_digits(raw)
}

/// Canonicalize a valid hex color to uppercase `#RRGGBB` (3-digit form expanded).
pub fn normalize_hex(hex: &str) -> Result<String> {
    if !is_valid_hex(hex) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    let expanded: String = if raw.len() == 3 {
        raw.chars().flat_map(|c| [c, c]).collect()
    } else {
        raw.to_string()
    };
    Ok(format!("#{}", expanded.to_ascii_uppercase()))
}
