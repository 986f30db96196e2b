use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

const DEFAULT_LISTEN: &str = "localhost:8080";
const DEFAULT_DOC_ROOT: &str = "./www";
const DEFAULT_READ_TIMEOUT_SECS: u64 = 5;

/// Server configuration.
///
/// Every field has a default, so a YAML file only needs the keys it
/// wants to override.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the listener binds to (e.g. "localhost:8080")
    pub listen_addr: String,
    /// Directory below which every served file must resolve
    pub doc_root: PathBuf,
    /// Seconds to wait for the request line before dropping the connection
    pub read_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN.to_string(),
            doc_root: PathBuf::from(DEFAULT_DOC_ROOT),
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// If `WEBROOT_CONFIG` points at a YAML file it is used as the base,
    /// then `LISTEN`, `DOC_ROOT` and `READ_TIMEOUT_SECS` override
    /// individual fields.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("WEBROOT_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.listen_addr = listen_addr;
        }
        if let Ok(doc_root) = std::env::var("DOC_ROOT") {
            cfg.doc_root = PathBuf::from(doc_root);
        }
        if let Ok(secs) = std::env::var("READ_TIMEOUT_SECS") {
            cfg.read_timeout_secs = secs
                .parse()
                .with_context(|| format!("READ_TIMEOUT_SECS is not a number: {secs}"))?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let cfg: Self = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.read_timeout_secs == 0 {
            anyhow::bail!("read_timeout_secs must be at least 1");
        }
        Ok(())
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}
