use std::{env, fs, path::PathBuf};

use directories::ProjectDirs;
use identity::ApiEndpoint;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::warn;

use crate::cli::Cli;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate: f64,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
}

fn default_tick_rate() -> f64 {
    4.0
}

fn default_frame_rate() -> f64 {
    30.0
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate: default_tick_rate(),
            frame_rate: default_frame_rate(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub api: ApiEndpoint,
    #[serde(default)]
    pub ui: UiConfig,
}

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref LOG_ENV: String = format!("{}_LOG_LEVEL", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

impl Config {
    /// Defaults, then `config.json5` / `config.toml` from the config dir,
    /// then `DAKASA_*` environment variables (`DAKASA_API__DOMAIN=...`).
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(get_data_dir(), get_config_dir(), None)
    }

    fn load(
        data_dir: PathBuf,
        config_dir: PathBuf,
        env_source: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let api = ApiEndpoint::default();
        let ui = UiConfig::default();
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("config_dir", config_dir.to_string_lossy().to_string())?
            .set_default("api.scheme", api.scheme)?
            .set_default("api.domain", api.domain)?
            .set_default("api.port", i64::from(api.port))?
            .set_default("ui.tick_rate", ui.tick_rate)?
            .set_default("ui.frame_rate", ui.frame_rate)?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.toml", config::FileFormat::Toml),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            warn!("No configuration file found, using defaults");
        }

        builder = builder.add_source(
            config::Environment::with_prefix(PROJECT_NAME.as_str())
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env_source),
        );

        builder.build()?.try_deserialize()
    }

    /// Command line flags win over every other source.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(scheme) = &cli.api_scheme {
            self.api.scheme = scheme.clone();
        }
        if let Some(domain) = &cli.api_domain {
            self.api.domain = domain.clone();
        }
        if let Some(port) = cli.api_port {
            self.api.port = port;
        }
        if let Some(tick_rate) = cli.tick_rate {
            self.ui.tick_rate = tick_rate;
        }
        if let Some(frame_rate) = cli.frame_rate {
            self.ui.frame_rate = frame_rate;
        }
    }
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("app", "dakasa", env!("CARGO_PKG_NAME"))
}

pub fn ensure_data_and_config_dirs_exist() -> std::io::Result<()> {
    fs::create_dir_all(get_data_dir())?;
    fs::create_dir_all(get_config_dir())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("dakasa-config-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn no_env() -> Option<config::Map<String, String>> {
        Some(config::Map::new())
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let dir = scratch_dir("defaults");
        let cfg = Config::load(dir.join("data"), dir.clone(), no_env()).unwrap();
        assert_eq!(cfg.api, ApiEndpoint::new("http", "localhost", 3000));
        assert_eq!(cfg.ui, UiConfig::default());
        assert_eq!(cfg.config.config_dir, dir);
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let dir = scratch_dir("toml");
        fs::write(
            dir.join("config.toml"),
            "[api]\nscheme = \"https\"\ndomain = \"api.dakasa.app\"\nport = 443\n",
        )
        .unwrap();
        let cfg = Config::load(dir.join("data"), dir.clone(), no_env()).unwrap();
        assert_eq!(cfg.api, ApiEndpoint::new("https", "api.dakasa.app", 443));
        fs::remove_file(dir.join("config.toml")).unwrap();
    }

    #[test]
    fn environment_overrides_defaults() {
        let dir = scratch_dir("env");
        let mut vars = config::Map::new();
        vars.insert("DAKASA_API__DOMAIN".to_string(), "staging.dakasa.app".to_string());
        vars.insert("DAKASA_API__PORT".to_string(), "8080".to_string());
        let cfg = Config::load(dir.join("data"), dir.clone(), Some(vars)).unwrap();
        assert_eq!(cfg.api.domain, "staging.dakasa.app");
        assert_eq!(cfg.api.port, 8080);
        assert_eq!(cfg.api.scheme, "http");
    }

    #[test]
    fn cli_flags_win() {
        let dir = scratch_dir("cli");
        let mut cfg = Config::load(dir.join("data"), dir.clone(), no_env()).unwrap();
        let cli = Cli::parse_from(["dakasa", "--api-domain", "10.0.0.2", "--api-port", "4000"]);
        cfg.apply_cli(&cli);
        assert_eq!(cfg.api, ApiEndpoint::new("http", "10.0.0.2", 4000));
    }
}
