//! Process-wide engine initialisation.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::device::GpuInit;
use crate::error::{EngineError, Result};
use crate::logging::{init_logging, LoggingConfig};
use crate::platform::WinitPlatform;

/// Configuration consumed by [`init`].
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub logging: LoggingConfig,
    pub gpu: GpuInit,
}

/// One-shot flag.
struct InitGuard(AtomicBool);

impl InitGuard {
    const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    fn claim(&self) -> Result<()> {
        if self.0.swap(true, Ordering::AcqRel) {
            return Err(EngineError::Init("engine already initialized".to_string()));
        }
        Ok(())
    }
}

static ENGINE: InitGuard = InitGuard::new();

/// Initialises logging and creates the native event loop.
///
/// Must be called once, on the main thread, before any scene is created; the
/// returned platform is what scenes are built from. A second call fails with
/// [`EngineError::Init`], as does a failed first call (the native event loop
/// cannot be recreated).
pub fn init(config: EngineConfig) -> Result<WinitPlatform> {
    ENGINE.claim()?;
    init_logging(config.logging);

    let platform = WinitPlatform::new(config.gpu).inspect_err(|e| log::error!("{e}"))?;
    log::info!("magma engine initialized");
    Ok(platform)
}
