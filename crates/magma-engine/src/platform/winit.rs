use std::sync::Arc;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window, WindowId};

use crate::coords::clamp_i32;
use crate::device::{Gpu, GpuInit};
use crate::error::{EngineError, Result};
use crate::render::GpuCanvas;

use super::{Platform, PlatformEvents, WindowDesc};

/// Poll interval of the blocking wait loop.
const WAIT_SLICE: Duration = Duration::from_millis(16);

/// Desktop platform: `winit` windows, one `wgpu` surface per canvas.
///
/// Owns the process-wide event loop; obtain it through [`crate::init`].
pub struct WinitPlatform {
    event_loop: EventLoop<()>,
    gpu_init: GpuInit,
}

impl WinitPlatform {
    pub(crate) fn new(gpu_init: GpuInit) -> Result<Self> {
        let event_loop = EventLoop::new()
            .map_err(|e| EngineError::Init(format!("failed to create winit EventLoop: {e}")))?;
        Ok(Self { event_loop, gpu_init })
    }

    /// Runs one pump of the native event queue.
    fn pump(&mut self, timeout: Option<Duration>, watch: Option<WindowId>) -> Pump {
        let mut pump = Pump { watch, closed: false, quit: false };
        if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(timeout, &mut pump) {
            log::debug!("event loop exited with code {code}");
            pump.quit = true;
        }
        pump
    }
}

impl Platform for WinitPlatform {
    type Window = Arc<Window>;
    type Canvas = GpuCanvas;

    fn create_window(&mut self, desc: &WindowDesc) -> Result<Arc<Window>> {
        let mut attrs = Window::default_attributes()
            .with_title(desc.title.as_str())
            .with_inner_size(PhysicalSize::new(desc.width, desc.height))
            .with_position(PhysicalPosition::new(
                clamp_i32(desc.position.x()),
                clamp_i32(desc.position.y()),
            ))
            .with_resizable(false);
        if desc.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        // Windows are created outside of an ApplicationHandler callback so that
        // scenes can be built synchronously.
        #[allow(deprecated)]
        let window = self.event_loop.create_window(attrs).map_err(|e| {
            EngineError::SurfaceCreation(format!("failed to create window `{}`: {e}", desc.title))
        })?;

        log::debug!("window `{}` created ({:?})", desc.title, window.id());
        Ok(Arc::new(window))
    }

    fn create_canvas(&mut self, window: &Arc<Window>) -> Result<GpuCanvas> {
        let gpu = pollster::block_on(Gpu::new(Arc::clone(window), self.gpu_init.clone()))
            .map_err(|e| EngineError::SurfaceCreation(format!("{e:#}")))?;
        Ok(GpuCanvas::new(gpu))
    }

    fn wait_for_close(&mut self, window: &Arc<Window>) {
        let id = window.id();
        log::debug!("waiting for window {id:?} to close");
        loop {
            let pump = self.pump(Some(WAIT_SLICE), Some(id));
            if pump.closed || pump.quit {
                break;
            }
        }
    }

    fn poll_events(&mut self) -> PlatformEvents {
        let pump = self.pump(Some(Duration::ZERO), None);
        PlatformEvents { quit_requested: pump.closed || pump.quit }
    }
}

/// Event handler for a single pump.
///
/// Closing the watched window (or pressing Escape in it) marks it closed;
/// closing any other window counts as a quit request.
struct Pump {
    watch: Option<WindowId>,
    closed: bool,
    quit: bool,
}

impl ApplicationHandler for Pump {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        let watched = self.watch == Some(id);
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                if watched {
                    self.closed = true;
                } else {
                    self.quit = true;
                }
            }
            WindowEvent::KeyboardInput { event, .. }
                if watched
                    && event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                self.closed = true;
            }
            _ => {}
        }
    }
}
