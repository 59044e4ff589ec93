//! Native windowing/drawing adapter.
//!
//! The engine core only talks to the platform through [`Platform`] and
//! [`Canvas`]. Native resources are released when the returned window and
//! canvas values are dropped, which makes teardown happen exactly once.
//!
//! Implementations:
//! - [`WinitPlatform`]: `winit` windows with a `wgpu` surface per canvas
//! - [`HeadlessPlatform`]: display-free, records every call (tests, offscreen)

mod headless;
mod winit;

pub use headless::{CanvasOp, HeadlessCanvas, HeadlessPlatform, HeadlessWindow, SurfaceStats};
pub use self::winit::WinitPlatform;

use crate::coords::{Color, Rect, Vec2};
use crate::error::Result;

/// Parameters for creating a native window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDesc {
    pub title: String,
    /// Top-left corner on the desktop, in physical pixels.
    pub position: Vec2,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

/// Events gathered by [`Platform::poll_events`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PlatformEvents {
    /// A window was closed or the platform asked the application to quit.
    pub quit_requested: bool,
}

/// Accelerated drawing surface bound to a window.
pub trait Canvas {
    fn set_draw_color(&mut self, color: Color);

    fn draw_color(&self) -> Color;

    /// Fills the whole surface with the current draw color and discards any
    /// rectangles queued since the last present.
    fn clear(&mut self);

    /// Fills `rect` with the current draw color.
    fn fill_rect(&mut self, rect: Rect);

    /// Shows everything drawn since the last clear.
    fn present(&mut self) -> Result<()>;

    /// Drawable size in physical pixels.
    fn size(&self) -> (u32, u32);
}

/// Creates windows and canvases and owns the native event queue.
pub trait Platform {
    type Window;
    type Canvas: Canvas;

    fn create_window(&mut self, desc: &WindowDesc) -> Result<Self::Window>;

    fn create_canvas(&mut self, window: &Self::Window) -> Result<Self::Canvas>;

    /// Blocks, polling the native event queue, until `window` is closed or a
    /// quit signal arrives.
    fn wait_for_close(&mut self, window: &Self::Window);

    /// Drains pending events without blocking.
    fn poll_events(&mut self) -> PlatformEvents;
}
