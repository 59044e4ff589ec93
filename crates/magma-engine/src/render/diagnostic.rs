//! Blocking, user-dismissible error surfaces.

use crate::coords::{Color, Rect, Vec2};
use crate::error::Result;
use crate::platform::{Canvas, Platform, WindowDesc};
use crate::text::Font;

/// Margin between the window edge and the message text.
const PADDING: u32 = 16;
/// Height of the colored banner along the top edge.
const BANNER_HEIGHT: u32 = 6;

/// Appearance of diagnostic windows.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticConfig {
    /// Font for the message. `None` probes common system locations.
    pub font_path: Option<std::path::PathBuf>,
    pub font_size: f32,
    pub width: u32,
    pub height: u32,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self { font_path: None, font_size: 18.0, width: 480, height: 160 }
    }
}

/// Content of a diagnostic window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub title: String,
    pub message: String,
    pub background: Color,
    pub banner: Color,
    pub text: Color,
}

impl Diagnostic {
    pub const MISSING_TRANSFORM_TITLE: &'static str = "Magma Engine Error";

    /// Shown when no entity in the render cache carries a Transform.
    pub fn missing_transform() -> Self {
        Self {
            title: Self::MISSING_TRANSFORM_TITLE.to_string(),
            message: "Missing Transform component: every rendered scene needs at least one \
                      entity with a Transform. Close this window to continue."
                .to_string(),
            background: Color::rgba(32, 32, 36, 255),
            banner: Color::rgba(200, 40, 40, 255),
            text: Color::WHITE,
        }
    }

    /// Draws the diagnostic onto `canvas` without presenting.
    pub fn draw(&self, canvas: &mut dyn Canvas, font: Option<&Font>, font_size: f32) {
        let (w, h) = canvas.size();

        canvas.set_draw_color(self.background);
        canvas.clear();

        canvas.set_draw_color(self.banner);
        canvas.fill_rect(Rect::new(0, 0, w, BANNER_HEIGHT.min(h)));

        let Some(font) = font else {
            return;
        };
        let origin = (PADDING as i32, (BANNER_HEIGHT + PADDING) as i32);
        let max_width = w.saturating_sub(2 * PADDING).max(1);
        let viewport = Rect::new(0, 0, w, h);

        canvas.set_draw_color(self.text);
        for run in font.rasterize_runs(&self.message, font_size, origin, Some(max_width)) {
            if let Some(visible) = run.intersect(viewport) {
                canvas.fill_rect(visible);
            }
        }
    }

    /// Opens a window, draws the diagnostic and blocks until the user closes
    /// it. The window and its canvas are released before returning.
    pub fn show_blocking<P: Platform>(
        &self,
        platform: &mut P,
        config: &DiagnosticConfig,
        font: Option<&Font>,
    ) -> Result<()> {
        let desc = WindowDesc {
            title: self.title.clone(),
            position: Vec2::new(100, 100),
            width: config.width,
            height: config.height,
            fullscreen: false,
        };

        let window = platform.create_window(&desc)?;
        let mut canvas = platform.create_canvas(&window)?;

        self.draw(&mut canvas, font, config.font_size);
        canvas.present()?;

        log::debug!("diagnostic `{}` shown, waiting for dismissal", self.title);
        platform.wait_for_close(&window);

        drop(canvas);
        drop(window);
        log::debug!("diagnostic `{}` dismissed", self.title);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{CanvasOp, HeadlessPlatform};

    #[test]
    fn missing_transform_mentions_transform() {
        let d = Diagnostic::missing_transform();
        assert_eq!(d.title, Diagnostic::MISSING_TRANSFORM_TITLE);
        assert!(d.message.contains("Transform"));
    }

    #[test]
    fn show_blocking_opens_waits_and_tears_down() {
        let mut p = HeadlessPlatform::new();
        let d = Diagnostic::missing_transform();
        d.show_blocking(&mut p, &DiagnosticConfig::default(), None).unwrap();

        let stats = p.stats();
        assert_eq!((stats.windows_created, stats.windows_destroyed), (1, 1));
        assert_eq!((stats.canvases_created, stats.canvases_destroyed), (1, 1));
        assert_eq!(stats.presents, 1);
        assert_eq!(stats.waited_on, [Diagnostic::MISSING_TRANSFORM_TITLE]);
    }

    #[test]
    fn without_font_draws_background_and_banner_only() {
        let mut p = HeadlessPlatform::new();
        let desc = WindowDesc {
            title: "d".into(),
            position: Vec2::zero(),
            width: 200,
            height: 100,
            fullscreen: false,
        };
        let window = p.create_window(&desc).unwrap();
        let mut canvas = p.create_canvas(&window).unwrap();
        let d = Diagnostic::missing_transform();
        d.draw(&mut canvas, None, 18.0);

        assert_eq!(
            canvas.ops(),
            [
                CanvasOp::SetDrawColor(d.background),
                CanvasOp::Clear(d.background),
                CanvasOp::SetDrawColor(d.banner),
                CanvasOp::FillRect(Rect::new(0, 0, 200, BANNER_HEIGHT), d.banner),
            ]
        );
    }

    #[test]
    fn canvas_failure_releases_diagnostic_window() {
        let mut p = HeadlessPlatform::new().failing_canvas();
        let err = Diagnostic::missing_transform().show_blocking(
            &mut p,
            &DiagnosticConfig::default(),
            None,
        );
        assert!(err.is_err());
        let stats = p.stats();
        assert_eq!((stats.windows_created, stats.windows_destroyed), (1, 1));
        assert!(stats.waited_on.is_empty());
    }
}
