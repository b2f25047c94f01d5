//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The circle renderer scales commands by the window scale factor and places
//!   each draw with a framebuffer-pixel viewport over a fixed clip-space quad.

mod ctx;
mod transforms;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use transforms::Transforms;
