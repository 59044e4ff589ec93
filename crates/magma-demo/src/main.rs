use anyhow::Context;

use magma_engine::component::{
    BoxCollider, CapsuleCollider, CapsuleOrientation, CircleCollider, Component, Physics,
    Transform,
};
use magma_engine::coords::{Color, Vec2};
use magma_engine::platform::Platform;
use magma_engine::render::{FrameOutcome, Renderer, RendererConfig};
use magma_engine::scene::{Scene, SceneConfig};
use magma_engine::time::FrameClock;
use magma_engine::EngineConfig;

/// Horizontal speed of the player marker, in pixels per second.
const PLAYER_SPEED: f32 = 120.0;

fn main() -> anyhow::Result<()> {
    // `--no-transform` leaves every entity without a Transform to show the
    // diagnostic window.
    let with_transform = !std::env::args().any(|a| a == "--no-transform");

    let mut platform = magma_engine::init(EngineConfig::default())?;

    let config = SceneConfig::new("Magma Demo", 800, 600).with_fps_target(60);
    let mut scene = Scene::new(&mut platform, config).context("creating demo scene")?;
    scene.clear(Color::rgba(16, 16, 24, 255))?;

    let mut player = scene.spawn("player", 100, 300)?;
    if with_transform {
        let at = player.position();
        player.add_component(Transform::new(at));
    }
    player
        .add_component(Physics::new(70.0))
        .add_component(BoxCollider::from_rect(Vec2::zero(), 24, 32));

    let mut coin = scene.spawn("coin", 400, 280)?;
    coin.add_component(CircleCollider::new(16.0));

    let mut pillar = scene.spawn("pillar", 600, 400)?;
    pillar.add_component(CapsuleCollider::new(
        Vec2::new(0, 0),
        CapsuleOrientation::Vertical,
        80.0,
        12.0,
    ));

    // Rejected: already registered.
    if let Err(e) = scene.spawn("coin", 10, 10) {
        log::info!("expected failure: {e}");
    }

    let mut renderer = Renderer::new(RendererConfig {
        clear_color: Color::rgba(16, 16, 24, 255),
        shape_color: Color::rgba(255, 170, 40, 255),
        ..RendererConfig::default()
    });
    for entity in [&player, &coin, &pillar] {
        renderer.add_to_cache(entity.entity().clone());
    }

    run(&mut platform, &mut scene, &mut renderer)?;

    log::info!("{} entities registered at exit", scene.entity_count());
    Ok(())
}

fn run<P: Platform>(
    platform: &mut P,
    scene: &mut Scene<P>,
    renderer: &mut Renderer,
) -> anyhow::Result<()> {
    let mut clock = FrameClock::with_target_fps(scene.fps_target());
    let mut travelled = 0.0f32;
    let width = scene.width();

    loop {
        if platform.poll_events().quit_requested {
            log::info!("quit requested");
            return Ok(());
        }

        let frame = clock.tick();
        travelled += PLAYER_SPEED * frame.dt;
        let step = travelled as u32;
        travelled -= step as f32;
        advance_player(renderer, step, width);

        match renderer.update(scene, platform)? {
            FrameOutcome::Drawn(_) => {}
            FrameOutcome::Halted => {
                log::warn!("renderer halted after diagnostic");
                return Ok(());
            }
        }

        clock.pace();
    }
}

/// Moves the first cached Transform right by `step`, wrapping at `width`.
fn advance_player(renderer: &mut Renderer, step: u32, width: u32) {
    let transform = renderer
        .cache_mut()
        .iter_mut()
        .flat_map(|e| e.components_mut())
        .find_map(|c| match c {
            Component::Transform(t) => Some(t),
            _ => None,
        });

    if let Some(t) = transform {
        t.move_by(Vec2::new(step, 0));
        if t.position().x() > width {
            t.move_to(Vec2::new(0, t.position().y()));
        }
    }
}
