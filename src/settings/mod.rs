pub mod deserializer;
pub mod settings_struct;
pub mod toml_settings;

pub use settings_struct::{Settings, SettingsError};
