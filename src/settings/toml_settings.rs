use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ALLOW_LAN, DEFAULT_EXTERNAL_CONTROLLER, DEFAULT_LISTEN_ADDRESS, DEFAULT_LISTEN_PORT,
    DEFAULT_LOG_LEVEL, DEFAULT_MIXED_PORT, DEFAULT_SOCKS_PORT, DEFAULT_WORKERS,
};
use crate::generator::BaseConfig;
use crate::models::TemplateVariant;
use crate::settings::deserializer::deserialize_loose_bool;

fn default_listen_address() -> String {
    DEFAULT_LISTEN_ADDRESS.to_string()
}

fn default_listen_port() -> u16 {
    DEFAULT_LISTEN_PORT
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_mixed_port() -> u16 {
    DEFAULT_MIXED_PORT
}

fn default_socks_port() -> u16 {
    DEFAULT_SOCKS_PORT
}

fn default_allow_lan() -> bool {
    DEFAULT_ALLOW_LAN
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_external_controller() -> String {
    DEFAULT_EXTERNAL_CONTROLLER.to_string()
}

/// Listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            listen_port: default_listen_port(),
            workers: default_workers(),
        }
    }
}

/// Template selection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TemplateSettings {
    pub variant: TemplateVariant,
}

/// Fixed preamble fields of the rendered document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseSettings {
    #[serde(default = "default_mixed_port")]
    pub port: u16,
    #[serde(default = "default_socks_port")]
    pub socks_port: u16,
    #[serde(
        default = "default_allow_lan",
        deserialize_with = "deserialize_loose_bool"
    )]
    pub allow_lan: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_external_controller")]
    pub external_controller: String,
}

impl Default for BaseSettings {
    fn default() -> Self {
        Self {
            port: default_mixed_port(),
            socks_port: default_socks_port(),
            allow_lan: default_allow_lan(),
            log_level: default_log_level(),
            external_controller: default_external_controller(),
        }
    }
}

impl From<BaseSettings> for BaseConfig {
    fn from(base: BaseSettings) -> Self {
        BaseConfig {
            port: base.port,
            socks_port: base.socks_port,
            allow_lan: base.allow_lan,
            log_level: base.log_level,
            external_controller: base.external_controller,
        }
    }
}

/// Top-level layout of the TOML settings file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TomlSettings {
    pub server: ServerSettings,
    pub template: TemplateSettings,
    pub base: BaseSettings,
}
