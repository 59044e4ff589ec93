//! Value types shared across scenes, components and renderers.
//!
//! Canonical space:
//! - Physical pixels
//! - Origin top-left
//! - +X right, +Y down

mod color;
mod rect;
mod vec2;

pub use color::Color;
pub use rect::Rect;
pub(crate) use rect::clamp_i32;
pub use vec2::Vec2;
