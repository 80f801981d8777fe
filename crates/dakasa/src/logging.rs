use std::fs::File;

use color_eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config;

/// Log into `<data dir>/dakasa.log`. The terminal belongs to the UI, so
/// there is no console layer.
///
/// Level: `RUST_LOG` if set, else `DAKASA_LOG_LEVEL`, else `info`.
pub fn init() -> Result<()> {
    let directory = config::get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = File::create(directory.join(config::LOG_FILE.clone()))?;

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .with_filter(env_filter(
            std::env::var("RUST_LOG").ok(),
            std::env::var(config::LOG_ENV.clone()).ok(),
        )?);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}

fn env_filter(rust_log: Option<String>, app_level: Option<String>) -> Result<EnvFilter> {
    let directives = rust_log
        .or(app_level)
        .unwrap_or_else(|| format!("{}=info,identity=info", env!("CARGO_CRATE_NAME")));
    Ok(EnvFilter::builder().parse(directives)?)
}
