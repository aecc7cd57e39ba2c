//! Logger setup. Diagnostics go to stdout through the `log` facade.
use std::sync::Once;

/// How `main` sets up the logger.
///
/// `env_filter` takes `env_logger` directives such as "debug" or
/// "opengl_game=debug". Without it `RUST_LOG` is read, then `info` is used.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Install the stdout logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(log::LevelFilter::Info),
        };

        builder
            .write_style(config.write_style)
            .target(env_logger::Target::Stdout);

        if let Err(e) = builder.try_init() {
            eprintln!("logger already set: {e}");
        }
    });
}
