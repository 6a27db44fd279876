//! Core engine-facing contracts.
//!
//! The boundary between the runtime (platform loop) and the application: the
//! `App` trait plus the per-frame context handed to it.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
