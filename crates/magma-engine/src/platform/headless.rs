use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::{Color, Rect};
use crate::error::{EngineError, Result};

use super::{Canvas, Platform, PlatformEvents, WindowDesc};

/// Call counters shared by a [`HeadlessPlatform`] and everything it creates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceStats {
    pub windows_created: usize,
    pub windows_destroyed: usize,
    pub canvases_created: usize,
    pub canvases_destroyed: usize,
    pub presents: usize,
    /// Titles of windows passed to `wait_for_close`, in call order.
    pub waited_on: Vec<String>,
}

/// One recorded canvas call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasOp {
    SetDrawColor(Color),
    Clear(Color),
    FillRect(Rect, Color),
    Present,
}

/// Platform without a display.
///
/// Windows and canvases are plain records; `wait_for_close` returns at once as
/// if the user dismissed the window immediately. Creation failures can be
/// injected to exercise partial-construction paths.
#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    stats: Rc<RefCell<SurfaceStats>>,
    fail_window: bool,
    fail_canvas: bool,
    quit_after_polls: Option<usize>,
    polls: usize,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `create_window` call fails.
    pub fn failing_window(mut self) -> Self {
        self.fail_window = true;
        self
    }

    /// Every `create_canvas` call fails (windows still succeed).
    pub fn failing_canvas(mut self) -> Self {
        self.fail_canvas = true;
        self
    }

    /// `poll_events` reports a quit request once it has been called `n` times.
    pub fn quit_after_polls(mut self, n: usize) -> Self {
        self.quit_after_polls = Some(n);
        self
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> SurfaceStats {
        self.stats.borrow().clone()
    }
}

impl Platform for HeadlessPlatform {
    type Window = HeadlessWindow;
    type Canvas = HeadlessCanvas;

    fn create_window(&mut self, desc: &WindowDesc) -> Result<HeadlessWindow> {
        if self.fail_window {
            return Err(EngineError::SurfaceCreation(format!(
                "headless window `{}` refused",
                desc.title
            )));
        }
        self.stats.borrow_mut().windows_created += 1;
        Ok(HeadlessWindow { desc: desc.clone(), stats: Rc::clone(&self.stats) })
    }

    fn create_canvas(&mut self, window: &HeadlessWindow) -> Result<HeadlessCanvas> {
        if self.fail_canvas {
            return Err(EngineError::SurfaceCreation(format!(
                "headless canvas for `{}` refused",
                window.desc.title
            )));
        }
        self.stats.borrow_mut().canvases_created += 1;
        Ok(HeadlessCanvas {
            width: window.desc.width,
            height: window.desc.height,
            draw_color: Color::BLACK,
            ops: Vec::new(),
            stats: Rc::clone(&self.stats),
        })
    }

    fn wait_for_close(&mut self, window: &HeadlessWindow) {
        self.stats.borrow_mut().waited_on.push(window.desc.title.clone());
    }

    fn poll_events(&mut self) -> PlatformEvents {
        self.polls += 1;
        PlatformEvents {
            quit_requested: self.quit_after_polls.is_some_and(|n| self.polls >= n),
        }
    }
}

/// Window record; counts its own destruction.
#[derive(Debug)]
pub struct HeadlessWindow {
    desc: WindowDesc,
    stats: Rc<RefCell<SurfaceStats>>,
}

impl HeadlessWindow {
    pub fn desc(&self) -> &WindowDesc {
        &self.desc
    }
}

impl Drop for HeadlessWindow {
    fn drop(&mut self) {
        self.stats.borrow_mut().windows_destroyed += 1;
    }
}

/// Canvas that records every call in order.
#[derive(Debug)]
pub struct HeadlessCanvas {
    width: u32,
    height: u32,
    draw_color: Color,
    ops: Vec<CanvasOp>,
    stats: Rc<RefCell<SurfaceStats>>,
}

impl HeadlessCanvas {
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Rectangles filled since the last clear.
    pub fn filled_since_clear(&self) -> Vec<Rect> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, CanvasOp::Clear(_)))
            .map_or(0, |i| i + 1);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                CanvasOp::FillRect(r, _) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn take_ops(&mut self) -> Vec<CanvasOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Canvas for HeadlessCanvas {
    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
        self.ops.push(CanvasOp::SetDrawColor(color));
    }

    fn draw_color(&self) -> Color {
        self.draw_color
    }

    fn clear(&mut self) {
        self.ops.push(CanvasOp::Clear(self.draw_color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(CanvasOp::FillRect(rect, self.draw_color));
    }

    fn present(&mut self) -> Result<()> {
        self.stats.borrow_mut().presents += 1;
        self.ops.push(CanvasOp::Present);
        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Drop for HeadlessCanvas {
    fn drop(&mut self) {
        self.stats.borrow_mut().canvases_destroyed += 1;
    }
}
