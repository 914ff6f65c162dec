//! WCAG 2.1 contrast checking: hex/RGB conversion, relative luminance,
//! contrast ratio, compliance classification and color adjustment suggestions.

pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod types;

#[cfg(feature = "napi")]
pub mod bindings;

pub use config::CheckerConfig;
pub use engine::ColorPairState;
pub use error::{ColorError, Result};
pub use math::checker::check_contrast;
pub use math::hex::{hex_to_rgb, is_valid_hex, normalize_hex, rgb_to_hex};
pub use math::suggest::{suggest_color_adjustment, DEFAULT_TARGET_RATIO};
pub use math::wcag::{contrast_ratio, relative_luminance};
pub use types::{ContrastReport, ContrastResult, Rgb};
