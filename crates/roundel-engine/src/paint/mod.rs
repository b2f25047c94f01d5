//! Paint model shared between the scene and renderers.
//!
//! Scope:
//! - color representation (straight-alpha RGBA)
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::{Color, ColorParseError};
