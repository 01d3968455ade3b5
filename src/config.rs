use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Server configuration.
///
/// The document root lives here and is handed to the static file store
/// explicitly; nothing else in the crate knows where files come from.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the TCP listener binds, e.g. `127.0.0.1:35000`.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Directory static files are served from.
    #[serde(default = "default_web_root")]
    pub web_root: PathBuf,
}

fn default_listen_addr() -> String {
    "127.0.0.1:35000".to_string()
}

fn default_web_root() -> PathBuf {
    PathBuf::from("static")
}

impl Config {
    /// Loads configuration.
    ///
    /// If the `CONFIG` env var names a YAML file, that file wins and any
    /// problem with it is fatal. Otherwise `LISTEN` and `WEB_ROOT` env
    /// vars override the defaults.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = std::env::var("CONFIG") {
            return Self::from_file(Path::new(&path));
        }

        let listen_addr = std::env::var("LISTEN").unwrap_or_else(|_| default_listen_addr());
        let web_root = std::env::var("WEB_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_web_root());

        Ok(Self {
            listen_addr,
            web_root,
        })
    }

    /// Parses a YAML config file. Missing fields fall back to defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        let config = serde_yaml::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }
}
