//! Scenes: the owner of a display surface and the authority for entity
//! identity and bounds.
//!
//! Responsibilities:
//! - create (and on drop, destroy) one window + canvas pair
//! - keep the registry of live entity identifiers duplicate-free
//! - reject entities placed outside the scene dimensions

mod entity;
mod registry;

pub use entity::SceneEntity;
pub use registry::Registration;

use crate::coords::{Color, Vec2};
use crate::entity::EntityId;
use crate::error::{EngineError, Result};
use crate::platform::{Canvas, Platform, WindowDesc};

use registry::SharedRegistry;

/// Scene/window configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub title: String,
    /// Window position on the desktop.
    pub position: Vec2,
    pub width: u32,
    pub height: u32,
    pub fps_target: u32,
    pub fullscreen: bool,
}

impl SceneConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self { title: title.into(), width, height, ..Self::default() }
    }

    pub fn with_fps_target(mut self, fps: u32) -> Self {
        self.fps_target = fps;
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: "magma".to_string(),
            position: Vec2::new(100, 100),
            width: 1280,
            height: 720,
            fps_target: 60,
            fullscreen: false,
        }
    }
}

/// A window with its drawing surface and the registry of live entity ids.
///
/// The canvas is declared before the window so it is dropped first.
pub struct Scene<P: Platform> {
    config: SceneConfig,
    canvas: P::Canvas,
    window: P::Window,
    registry: SharedRegistry,
}

impl<P: Platform> Scene<P> {
    /// Creates the window and its canvas.
    ///
    /// If canvas creation fails the window is released before returning.
    pub fn new(platform: &mut P, config: SceneConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(EngineError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }

        let desc = WindowDesc {
            title: config.title.clone(),
            position: config.position,
            width: config.width,
            height: config.height,
            fullscreen: config.fullscreen,
        };

        let window = platform.create_window(&desc)?;
        let canvas = platform.create_canvas(&window).inspect_err(|e| {
            log::error!("scene `{}`: {e}", config.title);
        })?;

        log::info!(
            "scene `{}` created ({}x{} @ {} fps)",
            config.title,
            config.width,
            config.height,
            config.fps_target
        );

        Ok(Self { config, canvas, window, registry: SharedRegistry::default() })
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.config.title
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.config.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.config.height
    }

    #[inline]
    pub fn fps_target(&self) -> u32 {
        self.config.fps_target
    }

    #[inline]
    pub fn window(&self) -> &P::Window {
        &self.window
    }

    #[inline]
    pub fn canvas(&self) -> &P::Canvas {
        &self.canvas
    }

    #[inline]
    pub fn canvas_mut(&mut self) -> &mut P::Canvas {
        &mut self.canvas
    }

    /// Snapshot of the registered identifiers, in registration order.
    pub fn entity_ids(&self) -> Vec<EntityId> {
        self.registry.borrow().ids().to_vec()
    }

    pub fn entity_count(&self) -> usize {
        self.registry.borrow().ids().len()
    }

    pub fn contains_id(&self, id: &EntityId) -> bool {
        self.registry.borrow().contains(id)
    }

    /// Appends `id` without any check. Only the validated spawn path uses it.
    pub(crate) fn add_id(&self, id: EntityId) -> Registration {
        Registration::register(&self.registry, id)
    }

    /// Validates and registers a new entity at `(x, y)`.
    ///
    /// Fails with [`EngineError::DuplicateId`] if `id` is live in this scene
    /// and with [`EngineError::OutOfBounds`] if `x > width` or `y > height`.
    /// A failed spawn leaves the registry untouched.
    pub fn spawn(&self, id: impl Into<EntityId>, x: u32, y: u32) -> Result<SceneEntity> {
        let id = id.into();

        if self.contains_id(&id) {
            log::warn!("scene `{}`: duplicate entity id `{id}`", self.title());
            return Err(EngineError::DuplicateId(id));
        }

        if x > self.width() || y > self.height() {
            log::warn!("scene `{}`: entity `{id}` at ({x}, {y}) out of bounds", self.title());
            return Err(EngineError::OutOfBounds {
                id,
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }

        let registration = self.add_id(id);
        log::debug!("scene `{}`: entity `{}` registered", self.title(), registration.id());
        Ok(SceneEntity::new(registration, x, y))
    }

    /// Fills the surface with `color`, resets the draw color to opaque black
    /// and presents.
    pub fn clear(&mut self, color: Color) -> Result<()> {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
        self.canvas.set_draw_color(Color::BLACK);
        self.canvas.present()
    }
}

impl<P: Platform> Drop for Scene<P> {
    fn drop(&mut self) {
        log::debug!(
            "scene `{}` torn down ({} entities still registered)",
            self.config.title,
            self.entity_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{CanvasOp, HeadlessPlatform, SurfaceStats};

    fn scene(platform: &mut HeadlessPlatform) -> Scene<HeadlessPlatform> {
        Scene::new(platform, SceneConfig::new("test", 800, 600)).unwrap()
    }

    // ── creation / teardown ───────────────────────────────────────────────

    #[test]
    fn new_exposes_config() {
        let mut p = HeadlessPlatform::new();
        let s = Scene::new(&mut p, SceneConfig::new("level 1", 320, 200).with_fps_target(30))
            .unwrap();
        assert_eq!(s.title(), "level 1");
        assert_eq!((s.width(), s.height(), s.fps_target()), (320, 200, 30));
        assert_eq!(s.window().desc().width, 320);
        assert_eq!(s.canvas().size(), (320, 200));
    }

    #[test]
    fn teardown_releases_surface_exactly_once() {
        let mut p = HeadlessPlatform::new();
        drop(scene(&mut p));

        let stats = p.stats();
        assert_eq!((stats.windows_created, stats.windows_destroyed), (1, 1));
        assert_eq!((stats.canvases_created, stats.canvases_destroyed), (1, 1));
    }

    #[test]
    fn canvas_failure_releases_window_once() {
        let mut p = HeadlessPlatform::new().failing_canvas();
        let err = Scene::new(&mut p, SceneConfig::default()).err();
        assert!(matches!(err, Some(EngineError::SurfaceCreation(_))));

        let stats = p.stats();
        assert_eq!((stats.windows_created, stats.windows_destroyed), (1, 1));
        assert_eq!((stats.canvases_created, stats.canvases_destroyed), (0, 0));
    }

    #[test]
    fn window_failure_creates_nothing() {
        let mut p = HeadlessPlatform::new().failing_window();
        assert!(Scene::new(&mut p, SceneConfig::default()).is_err());
        assert_eq!(p.stats(), SurfaceStats::default());
    }

    #[test]
    fn zero_dimension_is_rejected_before_platform_calls() {
        let mut p = HeadlessPlatform::new();
        let err = Scene::new(&mut p, SceneConfig::new("flat", 0, 10)).err();
        assert_eq!(err, Some(EngineError::InvalidDimensions { width: 0, height: 10 }));
        assert_eq!(p.stats().windows_created, 0);
    }

    // ── identity ──────────────────────────────────────────────────────────

    #[test]
    fn spawn_registers_once_and_drop_restores_registry() {
        let mut p = HeadlessPlatform::new();
        let s = scene(&mut p);
        let _keep = s.spawn("tree", 0, 0).unwrap();
        let before = s.entity_ids();

        let hero = s.spawn("hero", 800, 600).unwrap();
        let ids = s.entity_ids();
        assert_eq!(ids.iter().filter(|i| i.as_str() == "hero").count(), 1);
        assert_eq!(hero.id().as_str(), "hero");

        drop(hero);
        assert_eq!(s.entity_ids(), before);
    }

    #[test]
    fn duplicate_id_fails_before_registration() {
        let mut p = HeadlessPlatform::new();
        let s = scene(&mut p);
        let _first = s.spawn("hero", 1, 1).unwrap();

        let err = s.spawn("hero", 2, 2).err();
        assert_eq!(err, Some(EngineError::DuplicateId(EntityId::from("hero"))));
        assert_eq!(s.entity_count(), 1);
    }

    #[test]
    fn id_is_reusable_after_despawn() {
        let mut p = HeadlessPlatform::new();
        let s = scene(&mut p);
        s.spawn("hero", 1, 1).unwrap().despawn();
        assert!(s.spawn("hero", 1, 1).is_ok());
    }

    #[test]
    fn out_of_bounds_fails_without_registration() {
        let mut p = HeadlessPlatform::new();
        let s = scene(&mut p);

        assert!(matches!(s.spawn("far-x", 801, 0), Err(EngineError::OutOfBounds { .. })));
        assert!(matches!(s.spawn("far-y", 0, 601), Err(EngineError::OutOfBounds { .. })));
        assert_eq!(s.entity_count(), 0);
    }

    #[test]
    fn entity_outliving_scene_is_harmless() {
        let mut p = HeadlessPlatform::new();
        let s = scene(&mut p);
        let e = s.spawn("orphan", 0, 0).unwrap();
        drop(s);
        assert!(!e.is_registered());
        drop(e);
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_resets_draw_color_and_presents() {
        let mut p = HeadlessPlatform::new();
        let mut s = scene(&mut p);
        let teal = Color::rgba(0, 128, 128, 255);
        s.clear(teal).unwrap();

        assert_eq!(
            s.canvas().ops(),
            [
                CanvasOp::SetDrawColor(teal),
                CanvasOp::Clear(teal),
                CanvasOp::SetDrawColor(Color::BLACK),
                CanvasOp::Present,
            ]
        );
    }
}
