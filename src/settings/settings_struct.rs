use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::constants::DEFAULT_LISTEN_ADDRESS;
use crate::generator::BaseConfig;
use crate::models::TemplateVariant;
use crate::settings::toml_settings::TomlSettings;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings structure to hold the startup configuration
///
/// Built once before the server starts and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    // Server
    pub listen_address: String,
    pub listen_port: u16,
    pub workers: usize,

    // Template
    pub variant: TemplateVariant,
    pub base: BaseConfig,

    /// Path the settings were loaded from, empty for built-in defaults
    pub pref_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from(TomlSettings::default())
    }
}

impl From<TomlSettings> for Settings {
    fn from(toml_settings: TomlSettings) -> Self {
        let mut listen_address = toml_settings.server.listen_address;
        if listen_address.trim().is_empty() {
            listen_address = DEFAULT_LISTEN_ADDRESS.to_string();
        }

        Settings {
            listen_address,
            listen_port: toml_settings.server.listen_port,
            workers: toml_settings.server.workers.max(1),
            variant: toml_settings.template.variant,
            base: toml_settings.base.into(),
            pref_path: String::new(),
        }
    }
}

impl Settings {
    /// Create a new settings instance with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from TOML text
    pub fn load_from_content(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: TomlSettings = toml::from_str(content)?;
        Ok(Settings::from(toml_settings))
    }

    /// Load settings from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        debug!("Loading settings from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let mut settings = Settings::load_from_content(&content)?;
        settings.pref_path = path.display().to_string();
        Ok(settings)
    }

    /// `address:port` the server binds to
    ///
    /// An address that already carries a port is used as is.
    pub fn bind_address(&self) -> String {
        let addr = self.listen_address.trim();
        if addr.starts_with('[') {
            if addr.contains("]:") {
                return addr.to_string();
            }
            return format!("{}:{}", addr, self.listen_port);
        }
        match addr.matches(':').count() {
            0 => format!("{}:{}", addr, self.listen_port),
            1 => addr.to_string(),
            // bare IPv6 address
            _ => format!("[{}]:{}", addr, self.listen_port),
        }
    }
}
