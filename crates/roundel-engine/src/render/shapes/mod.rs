//! Shape renderers.

pub mod circle;

pub use circle::CircleRenderer;
