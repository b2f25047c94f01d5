//! Engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and applications:
//! the [`App`] trait plus the per-frame context passed to it.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
