use csscolorparser::Color;
use log::debug;

use super::hex::{is_valid_hex, normalize_hex};

/// Convert a CSS color value to canonical `#RRGGBB`.
/// Handles: hex (3/6 digit, with or without `#`), rgb, hsl, hwb, named colors.
/// Returns None for: transparent, inherit, currentColor, translucent colors,
/// unrecognized input. Contrast is only defined between opaque colors.
pub fn to_hex(value: &str) -> Option<String> {
    let trimmed = value.trim();

    // Special values -> None
    match trimmed.to_ascii_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => return None,
        _ => {}
    }

    if is_valid_hex(trimmed) {
        return normalize_hex(trimmed).ok();
    }

    match trimmed.parse::<Color>() {
        Ok(color) => {
            let [r, g, b, a] = color.to_rgba8();
            if a < 255 {
                debug!("ignoring translucent color '{}'", trimmed);
                None
            } else {
                Some(format!("#{:02X}{:02X}{:02X}", r, g, b))
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_passthrough_is_normalized() {
        assert_eq!(to_hex("#ff0000"), Some("#FF0000".to_string()));
        assert_eq!(to_hex("1e293b"), Some("#1E293B".to_string()));
        assert_eq!(to_hex("  #abc "), Some("#AABBCC".to_string()));
    }

    #[test]
    fn rgb_comma_format() {
        assert_eq!(to_hex("rgb(255, 0, 128)"), Some("#FF0080".to_string()));
    }

    #[test]
    fn rgb_space_format() {
        assert_eq!(to_hex("rgb(85 26 139)"), Some("#551A8B".to_string()));
    }

    #[test]
    fn hsl_red() {
        assert_eq!(to_hex("hsl(0, 100%, 50%)"), Some("#FF0000".to_string()));
    }

    #[test]
    fn named_color() {
        assert_eq!(to_hex("white"), Some("#FFFFFF".to_string()));
        assert_eq!(to_hex("Black"), Some("#000000".to_string()));
    }

    #[test]
    fn translucent_returns_none() {
        assert_eq!(to_hex("rgba(0, 0, 0, 0.5)"), None);
        assert_eq!(to_hex("#ff000080"), None);
    }

    #[test]
    fn opaque_8digit_hex_accepted() {
        assert_eq!(to_hex("#ff0000ff"), Some("#FF0000".to_string()));
    }

    #[test]
    fn keywords_return_none() {
        assert_eq!(to_hex("transparent"), None);
        assert_eq!(to_hex("inherit"), None);
        assert_eq!(to_hex("currentColor"), None);
    }

    #[test]
    fn garbage_returns_none() {
        assert_eq!(to_hex("not-a-color"), None);
        assert_eq!(to_hex(""), None);
    }
}
