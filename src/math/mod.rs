//! Contrast engine: pure functions over [`Rgb`](crate::types::Rgb) values.

pub mod checker;
pub mod color_parse;
pub mod hex;
pub mod suggest;
pub mod wcag;
