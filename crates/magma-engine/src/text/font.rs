use std::path::{Path, PathBuf};

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Rect;
use crate::error::{EngineError, Result};

use super::runs::coverage_runs;

/// Locations probed when no font path is configured.
pub const FALLBACK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Pixels with at least this much coverage are drawn.
const COVERAGE_THRESHOLD: u8 = 128;

/// A parsed TrueType/OpenType font.
pub struct Font {
    inner: fontdue::Font,
    source: PathBuf,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font").field("source", &self.source).finish_non_exhaustive()
    }
}

impl Font {
    /// Parses a font from raw bytes. `source` is only used in messages.
    pub fn from_bytes(bytes: &[u8], source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let inner = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()).map_err(
            |reason| EngineError::FontLoad {
                path: source.display().to_string(),
                reason: reason.to_string(),
            },
        )?;
        Ok(Self { inner, source })
    }

    /// Reads and parses the font file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| EngineError::FontLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_bytes(&bytes, path)
    }

    /// Loads `path` if given, otherwise the first usable entry of
    /// [`FALLBACK_FONT_PATHS`].
    ///
    /// Failure is logged and yields `None`; callers render without text.
    pub fn load_or_warn(path: Option<&Path>) -> Option<Self> {
        if let Some(path) = path {
            return Self::load(path)
                .inspect_err(|e| log::warn!("{e}; continuing without text"))
                .ok();
        }

        let found = FALLBACK_FONT_PATHS
            .iter()
            .map(Path::new)
            .filter(|p| p.is_file())
            .find_map(|p| Self::load(p).inspect_err(|e| log::debug!("{e}")).ok());

        match &found {
            Some(font) => log::debug!("using fallback font {}", font.source.display()),
            None => log::warn!("no usable fallback font found; continuing without text"),
        }
        found
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Lays out `text` at `size` px with its top-left corner at `origin` and
    /// returns the covered pixels as 1 px high horizontal runs.
    ///
    /// Lines wrap at `max_width` when given.
    pub fn rasterize_runs(
        &self,
        text: &str,
        size: f32,
        origin: (i32, i32),
        max_width: Option<u32>,
    ) -> Vec<Rect> {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            max_width: max_width.map(|w| w as f32),
            ..LayoutSettings::default()
        });
        layout.append(&[&self.inner], &TextStyle::new(text, size, 0));

        let mut runs = Vec::new();
        for glyph in layout.glyphs() {
            if glyph.width == 0 || glyph.height == 0 || glyph.parent.is_whitespace() {
                continue;
            }
            let (metrics, bitmap) = self.inner.rasterize_config(glyph.key);
            let x0 = origin.0.saturating_add(glyph.x.round() as i32);
            let y0 = origin.1.saturating_add(glyph.y.round() as i32);
            runs.extend(coverage_runs(
                &bitmap,
                metrics.width,
                metrics.height,
                (x0, y0),
                COVERAGE_THRESHOLD,
            ));
        }

        log::trace!("rasterized {:?} into {} runs", text, runs.len());
        runs
    }
}
