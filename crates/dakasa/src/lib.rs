//! DaKasa account screens for the terminal.
//!
//! Login, the three-step registration wizard and the three-step password
//! recovery flow, talking to the identity backend through [`identity`].
//!
//! Layout:
//! - `domain`     : validators, step wizard, recovery session, concrete forms
//! - `form`       : structured form state bound to the terminal inputs
//! - `core`       : state, reducer, effects, executor and the event loop
//! - `pages`      : one renderer per view
//! - `components` : shared widgets (form view, alert)

pub mod action;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod form;
pub mod logging;
pub mod pages;
pub mod theme;
pub mod tui;

use color_eyre::Result;
use tracing::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::core::app::App;

pub async fn run(cli: Cli) -> Result<()> {
    errors::init()?;
    config::ensure_data_and_config_dirs_exist()?;
    logging::init()?;

    let mut config = Config::new()?;
    config.apply_cli(&cli);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %config.config.data_dir.display(),
        "starting"
    );

    let mut app = App::new(config)?;
    app.run().await
}
