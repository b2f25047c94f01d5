//! GPU device layer: instance/adapter/device setup, surface configuration,
//! and per-frame texture acquisition.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
