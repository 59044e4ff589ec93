//! Text rasterisation for diagnostic surfaces.
//!
//! Glyphs are rasterised on the CPU with `fontdue` and turned into horizontal
//! pixel runs, so any [`Canvas`](crate::platform::Canvas) that can fill
//! rectangles can draw text.

mod font;
mod runs;

pub use font::{Font, FALLBACK_FONT_PATHS};
pub use runs::coverage_runs;
