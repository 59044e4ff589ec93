use std::cell::OnceCell;

use crate::coords::Color;
use crate::entity::Entity;
use crate::error::Result;
use crate::platform::{Canvas, Platform};
use crate::scene::Scene;
use crate::text::Font;

use super::{classify, Diagnostic, DiagnosticConfig, DrawConsumer, FrameSlots, ShapeOutlines};

/// Renderer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Background of every drawn frame.
    pub clear_color: Color,
    /// Color of the default [`ShapeOutlines`] consumer.
    pub shape_color: Color,
    pub diagnostic: DiagnosticConfig,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::BLACK,
            shape_color: Color::WHITE,
            diagnostic: DiagnosticConfig::default(),
        }
    }
}

/// Result of one [`Renderer::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// The frame was drawn from these slots.
    Drawn(FrameSlots),
    /// No Transform was found; the diagnostic was shown and nothing was drawn.
    Halted,
}

/// Owns the render cache and drives the per-frame dispatch.
pub struct Renderer {
    config: RendererConfig,
    cache: Vec<Entity>,
    consumers: Vec<Box<dyn DrawConsumer>>,
    font: OnceCell<Option<Font>>,
}

impl Renderer {
    /// Creates a renderer with the [`ShapeOutlines`] consumer installed.
    pub fn new(config: RendererConfig) -> Self {
        let outlines = ShapeOutlines { color: config.shape_color, ..ShapeOutlines::default() };
        Self {
            config,
            cache: Vec::new(),
            consumers: vec![Box::new(outlines)],
            font: OnceCell::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Appends `entity` to the render cache.
    pub fn add_to_cache(&mut self, entity: Entity) {
        log::trace!("render cache += `{}`", entity.name());
        self.cache.push(entity);
    }

    #[inline]
    pub fn cache(&self) -> &[Entity] {
        &self.cache
    }

    #[inline]
    pub fn cache_mut(&mut self) -> &mut [Entity] {
        &mut self.cache
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Appends a consumer; consumers run in insertion order.
    pub fn add_consumer(&mut self, consumer: impl DrawConsumer + 'static) {
        self.consumers.push(Box::new(consumer));
    }

    /// Removes every consumer, including the default one.
    pub fn clear_consumers(&mut self) {
        self.consumers.clear();
    }

    /// Runs one frame.
    ///
    /// Classifies the render cache. If no entity supplied a Transform, shows
    /// the missing-Transform diagnostic and blocks until it is dismissed;
    /// the scene is not touched. Otherwise clears the scene, runs every
    /// consumer and presents.
    pub fn update<P: Platform>(
        &mut self,
        scene: &mut Scene<P>,
        platform: &mut P,
    ) -> Result<FrameOutcome> {
        let slots = classify(&self.cache);

        if !slots.has_transform() {
            log::error!(
                "scene `{}`: none of the {} cached entities has a Transform",
                scene.title(),
                self.cache.len()
            );
            let font = self
                .font
                .get_or_init(|| Font::load_or_warn(self.config.diagnostic.font_path.as_deref()));
            Diagnostic::missing_transform().show_blocking(
                platform,
                &self.config.diagnostic,
                font.as_ref(),
            )?;
            return Ok(FrameOutcome::Halted);
        }

        let canvas = scene.canvas_mut();
        canvas.set_draw_color(self.config.clear_color);
        canvas.clear();
        for consumer in &mut self.consumers {
            consumer.draw(&slots, &mut *canvas);
        }
        canvas.set_draw_color(Color::BLACK);
        canvas.present()?;

        Ok(FrameOutcome::Drawn(slots))
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .field("consumers", &self.consumers.len())
            .finish_non_exhaustive()
    }
}
