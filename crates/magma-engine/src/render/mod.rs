//! Rendering: the per-frame dispatcher and the GPU canvas.
//!
//! - `dispatch` classifies a render cache into [`FrameSlots`]
//! - `renderer` owns the cache and drives consumers or the diagnostic
//! - `canvas` + `shapes` implement [`Canvas`](crate::platform::Canvas) on wgpu
//!
//! Convention: geometry is in physical pixels, top-left origin, +Y down.

mod canvas;
mod diagnostic;
mod dispatch;
mod draw;
mod renderer;
mod shapes;

pub use canvas::GpuCanvas;
pub use diagnostic::{Diagnostic, DiagnosticConfig};
pub use dispatch::{classify, FrameSlots};
pub use draw::{DrawConsumer, ShapeOutlines};
pub use renderer::{FrameOutcome, Renderer, RendererConfig};
