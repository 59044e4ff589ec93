use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g.
/// `"magma_engine=debug,wgpu=warn"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, write_style: env_logger::WriteStyle::Auto }
    }
}

/// GPU and windowing crates are noisy at `info`.
const QUIET_DEPENDENCIES: &[(&str, log::LevelFilter)] = &[
    ("wgpu_core", log::LevelFilter::Warn),
    ("wgpu_hal", log::LevelFilter::Warn),
    ("naga", log::LevelFilter::Warn),
];

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are ignored.
///
/// Precedence: `config.env_filter`, then `RUST_LOG`, then `info`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
                for (module, level) in QUIET_DEPENDENCIES {
                    builder.filter_module(module, *level);
                }
            }
        }

        builder.write_style(config.write_style);

        // Another logger may already be installed (tests, embedding apps).
        if let Err(e) = builder.try_init() {
            eprintln!("magma: logger not installed: {e}");
            return;
        }
        log::debug!("logging initialized");
    });
}
