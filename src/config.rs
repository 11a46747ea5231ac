use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

fn default_listen_addr() -> String {
    "127.0.0.1:8008".to_string()
}

fn default_document_root() -> PathBuf {
    PathBuf::from("root")
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Address the listener binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Directory all file targets are resolved under. Read-only for the
    /// process lifetime.
    #[serde(default = "default_document_root")]
    pub document_root: PathBuf,
}

impl Config {
    /// Loads configuration from the YAML file named by `CONFIG`, or from
    /// the `LISTEN` / `DOCUMENT_ROOT` env vars when no file is given.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = std::env::var("CONFIG") {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {}", path))?;
            let cfg = serde_yaml::from_str(&contents)
                .with_context(|| format!("parsing config file {}", path))?;
            return Ok(cfg);
        }

        let listen_addr =
            std::env::var("LISTEN")
                .unwrap_or_else(|_| default_listen_addr());
        let document_root =
            std::env::var("DOCUMENT_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_document_root());

        Ok(Self { listen_addr, document_root })
    }
}
