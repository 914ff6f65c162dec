//! Error types for the contrast engine.
//!
//! The contrast math itself never fails; these cover the operations that must
//! reject malformed input outright.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not 3 or 6 hex digits with an optional `#`
    #[error("invalid hex color: '{0}'")]
    InvalidHex(String),

    /// Configuration document could not be parsed or holds invalid values
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a configuration file failed
    #[error("IO error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;

impl From<std::io::Error> for ColorError {
    fn from(err: std::io::Error) -> Self {
        ColorError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ColorError {
    fn from(err: serde_json::Error) -> Self {
        ColorError::Config(err.to_string())
    }
}

#[cfg(feature = "napi")]
impl From<ColorError> for napi::Error {
    fn from(err: ColorError) -> Self {
        napi::Error::new(napi::Status::InvalidArg, err.to_string())
    }
}
