use log::debug;

use crate::config::CheckerConfig;
use crate::math::checker::{check_contrast, compliance_badges, format_ratio};
use crate::math::hex::{hex_to_rgb, normalize_hex, rgb_to_hex};
use crate::math::suggest::suggestion_options;
use crate::types::{ContrastQuality, ContrastReport, ContrastResult};

/// Query parameter that pre-seeds the foreground color.
pub const FOREGROUND_PARAM: &str = "fcolor";
/// Query parameter that pre-seeds the background color.
pub const BACKGROUND_PARAM: &str = "bcolor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// The foreground/background pair currently being checked.
///
/// Both colors are kept exactly as typed; nothing is validated until a
/// result or display color is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPairState {
    foreground: String,
    background: String,
    fallback_foreground: String,
    fallback_background: String,
}

impl ColorPairState {
    pub fn new(config: &CheckerConfig) -> Self {
        Self {
            foreground: config.default_foreground.clone(),
            background: config.default_background.clone(),
            fallback_foreground: config.fallback_foreground.clone(),
            fallback_background: config.fallback_background.clone(),
        }
    }

    /// Seed colors from `fcolor` / `bcolor` in a URL query string.
    /// Only the first occurrence of each key counts; an invalid or missing
    /// value leaves the current color in place.
    pub fn apply_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (percent_decode(key), percent_decode(value))
            })
            .collect();

        for (param, target) in [
            (FOREGROUND_PARAM, &mut self.foreground),
            (BACKGROUND_PARAM, &mut self.background),
        ] {
            let Some((_, value)) = pairs.iter().find(|(key, _)| key == param) else {
                continue;
            };
            match normalize_hex(value) {
                Ok(hex) => {
                    debug!("{param}={value} accepted as {hex}");
                    *target = hex;
                }
                Err(_) => debug!("{param}={value} ignored"),
            }
        }
    }

    pub fn foreground(&self) -> &str {
        &self.foreground
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn set_foreground(&mut self, value: impl Into<String>) {
        self.foreground = value.into();
    }

    pub fn set_background(&mut self, value: impl Into<String>) {
        self.background = value.into();
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.foreground, &mut self.background);
    }

    pub fn apply_suggestion(&mut self, foreground: &str, background: &str) {
        self.foreground = foreground.to_uppercase();
        self.background = background.to_uppercase();
    }

    pub fn display_foreground(&self) -> String {
        display_color(&self.foreground, &self.fallback_foreground)
    }

    pub fn display_background(&self) -> String {
        display_color(&self.background, &self.fallback_background)
    }

    /// None unless both colors are full 6-digit hex values.
    pub fn evaluate(&self) -> Option<ContrastResult> {
        let fg = hex_to_rgb(&self.foreground)?;
        let bg = hex_to_rgb(&self.background)?;
        Some(check_contrast(fg, bg))
    }

    pub fn report(&self, config: &CheckerConfig) -> Option<ContrastReport> {
        let result = self.evaluate()?;
        let foreground = self.display_foreground();
        let background = self.display_background();

        let suggestions = if result.normal_aa {
            Vec::new()
        } else {
            let fg = hex_to_rgb(&foreground)?;
            let bg = hex_to_rgb(&background)?;
            suggestion_options(fg, bg, config.target_ratio)
        };

        Some(ContrastReport {
            foreground,
            background,
            ratio_text: format_ratio(result.ratio),
            quality: ContrastQuality::from_result(&result),
            percentage: result.percentage_of_max(),
            badges: compliance_badges(&result),
            suggestions,
            result,
        })
    }
}

fn display_color(value: &str, fallback: &str) -> String {
    normalize_hex(value).unwrap_or_else(|_| fallback.to_string())
}

/// Clean up typed hex: uppercase, keep only `[A-F0-9]`, prefix `#`.
/// Returns None when more than six digits remain so the caller keeps the
/// previous value.
pub fn sanitize_hex_input(raw: &str) -> Option<String> {
    // full Unicode uppercasing, so 'ﬀ' becomes "FF" as in the browser
    let digits: String = raw
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .collect();
    (digits.len() <= 6).then(|| format!("#{digits}"))
}

/// Replace one channel of a 6-digit hex color, clamping the value to 0-255.
pub fn set_channel(hex: &str, channel: Channel, value: i64) -> Option<String> {
    let rgb = hex_to_rgb(hex)?;
    let value = value.clamp(0, 255) as f64;
    let (r, g, b) = (rgb.r as f64, rgb.g as f64, rgb.b as f64);
    Some(match channel {
        Channel::Red => rgb_to_hex(value, g, b),
        Channel::Green => rgb_to_hex(r, value, b),
        Channel::Blue => rgb_to_hex(r, g, value),
    })
}

fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'+' {
            out.push(b' ');
            i += 1;
            continue;
        }
        if bytes[i] == b'%' {
            let escape = value.get(i + 1..i + 3).filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()));
            if let Some(byte) = escape.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
