//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Device/Queue for one window
//! - creating & configuring that window's Surface (swapchain)
//! - acquiring frames and mapping surface errors to engine actions

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
