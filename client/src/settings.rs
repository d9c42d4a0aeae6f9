use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::LevelFilter;
use realm_core::constants::CLIENT_VERSION;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 5555;

const SETTINGS_DIR: &str = ".realm-client";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub server_host: String,
    pub server_port: u16,
    /// Protocol version sent with every login.
    pub client_version: u8,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
    /// Optional file that receives a copy of every log record.
    pub log_file: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            client_version: CLIENT_VERSION,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl ClientSettings {
    /// Reads and parses `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read settings file {:?}", path))?;
        serde_json::from_slice::<ClientSettings>(&bytes)
            .with_context(|| format!("failed to parse settings file {:?}", path))
    }

    /// Like [`ClientSettings::load`], but falls back to defaults when the file
    /// is missing or cannot be parsed. Never fails.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{:#}, using defaults", e);
            Self::default()
        })
    }

    /// Writes the settings as pretty JSON, creating the parent directory.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create settings dir {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("failed to serialize settings")?;
        fs::write(path, format!("{json}\n"))
            .with_context(|| format!("failed to write settings file {:?}", path))?;

        log::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// The configured level, or `Info` when the string is not a level name.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// `$HOME/.realm-client/settings.json`, then `%APPDATA%`, then the working
/// directory.
pub fn default_settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(SETTINGS_DIR).join(SETTINGS_FILE);
    }
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join(SETTINGS_DIR).join(SETTINGS_FILE);
    }
    PathBuf::from(SETTINGS_FILE)
}
