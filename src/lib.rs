pub mod constants;
pub mod generator;
pub mod models;
pub mod settings;
pub mod utils;
#[cfg(feature = "web-api")]
pub mod web_handlers;

// Re-export the renderer and its input/output types for easier access
pub use generator::{BaseConfig, ConfigRenderer, RenderedDocument};
pub use models::{AppState, RenderError, RenderErrorKind, RenderRequest, TemplateVariant};

// Re-export configuration types
pub use settings::{Settings, SettingsError};
