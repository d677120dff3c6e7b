//! Server configuration file.
//!
//! ```toml
//! [service]
//! data_dir = "/var/lib/billing"
//! listen = "0.0.0.0:8080"
//! request_timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};

use billing_core::ServiceConfig;
use serde::Deserialize;

/// Directory searched for bare context names.
const CONFIG_DIR: &str = "/etc/billing";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub service: ServiceConfig,
}

impl ServerConfig {
    /// Resolve `-c` to a file: values containing `/` or `.` are paths,
    /// anything else is `/etc/billing/<name>.toml`.
    pub fn resolve_path(name: &str) -> PathBuf {
        if name.contains('/') || name.contains('.') {
            PathBuf::from(name)
        } else {
            Path::new(CONFIG_DIR).join(format!("{name}.toml"))
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
