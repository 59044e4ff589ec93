//! Magma engine crate.
//!
//! A small entity-component-scene layer for 2D games:
//! - [`coords`] / [`component`] / [`entity`]: value types and component data
//! - [`scene`]: window ownership, entity identity and bounds
//! - [`render`]: per-frame component dispatch, draw consumers, diagnostics
//! - [`platform`]: windowing/drawing adapter (`winit` + `wgpu`, or headless)
//!
//! Start with [`init`], which yields the platform scenes are created from.

pub mod component;
pub mod coords;
pub mod device;
pub mod entity;
pub mod error;
pub mod logging;
pub mod platform;
pub mod render;
pub mod scene;
pub mod text;
pub mod time;

mod init;

pub use error::{EngineError, Result};
pub use init::{init, EngineConfig};
