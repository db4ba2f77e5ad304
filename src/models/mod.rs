//! Core data models for the application
//!
//! Request-scoped input and error types plus the startup state handed to the
//! web handlers. Nothing here outlives a request except [`AppState`], which is
//! immutable.

pub mod app_state;
pub mod proxy_group_config;
pub mod render_error;
pub mod render_request;
pub mod template_variant;

pub use app_state::AppState;
pub use proxy_group_config::{ProxyGroupConfig, ProxyGroupType};
pub use render_error::{RenderError, RenderErrorKind};
pub use render_request::RenderRequest;
pub use template_variant::TemplateVariant;
