//! Checker configuration.
//!
//! Holds the colors the checker starts from and the target ratio used for
//! suggestions. Documents are JSON with camelCase keys; missing keys take the
//! defaults below.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};
use crate::math::hex::{is_valid_hex, normalize_hex};
use crate::math::suggest::DEFAULT_TARGET_RATIO;

pub const DEFAULT_FOREGROUND: &str = "#551A8B";
pub const DEFAULT_BACKGROUND: &str = "#D4F1F4";
/// Shown while the typed foreground is not a valid color.
pub const FALLBACK_FOREGROUND: &str = "#000000";
/// Shown while the typed background is not a valid color.
pub const FALLBACK_BACKGROUND: &str = "#FFFFFF";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    pub default_foreground: String,
    pub default_background: String,
    pub fallback_foreground: String,
    pub fallback_background: String,
    pub target_ratio: f64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            default_foreground: DEFAULT_FOREGROUND.to_string(),
            default_background: DEFAULT_BACKGROUND.to_string(),
            fallback_foreground: FALLBACK_FOREGROUND.to_string(),
            fallback_background: FALLBACK_BACKGROUND.to_string(),
            target_ratio: DEFAULT_TARGET_RATIO,
        }
    }
}

impl CheckerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CheckerConfig = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content).map_err(|e| {
            warn!("rejecting config file {}: {}", path.display(), e);
            e
        })
    }

    /// Check every color and the target ratio, returning the config with
    /// colors in canonical `#RRGGBB` form.
    pub fn validate(self) -> Result<Self> {
        if !(1.0..=21.0).contains(&self.target_ratio) {
            return Err(ColorError::Config(format!(
                "targetRatio must be between 1 and 21, got {}",
                self.target_ratio
            )));
        }

        let color = |field: &str, value: &str| -> Result<String> {
            if !is_valid_hex(value) {
                return Err(ColorError::Config(format!("{field} is not a hex color: '{value}'")));
            }
            normalize_hex(value)
        };

        Ok(Self {
            default_foreground: color("defaultForeground", &self.default_foreground)?,
            default_background: color("defaultBackground", &self.default_background)?,
            fallback_foreground: color("fallbackForeground", &self.fallback_foreground)?,
            fallback_background: color("fallbackBackground", &self.fallback_background)?,
            target_ratio: self.target_ratio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CheckerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CheckerConfig::default());
    }

    #[test]
    fn partial_document_overrides_and_normalizes() {
        let config =
            CheckerConfig::from_json_str(r#"{"defaultForeground": "fff", "targetRatio": 7}"#).unwrap();
        assert_eq!(config.default_foreground, "#FFFFFF");
        assert_eq!(config.default_background, DEFAULT_BACKGROUND);
        assert_eq!(config.target_ratio, 7.0);
    }

    #[test]
    fn invalid_color_rejected() {
        let err = CheckerConfig::from_json_str(r##"{"fallbackBackground": "#12345"}"##).unwrap_err();
        assert!(matches!(err, ColorError::Config(msg) if msg.contains("fallbackBackground")));
    }

    #[test]
    fn target_ratio_out_of_range_rejected() {
        assert!(CheckerConfig::from_json_str(r#"{"targetRatio": 0.5}"#).is_err());
        assert!(CheckerConfig::from_json_str(r#"{"targetRatio": 22}"#).is_err());
        assert!(CheckerConfig::from_json_str(r#"{"targetRatio": 21}"#).is_ok());
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(
            CheckerConfig::from_json_str("{not json"),
            Err(ColorError::Config(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"{{"defaultBackground": "#000"}}"##).unwrap();
        let config = CheckerConfig::load(file.path()).unwrap();
        assert_eq!(config.default_background, "#000000");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CheckerConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ColorError::Io(_)));
    }
}
