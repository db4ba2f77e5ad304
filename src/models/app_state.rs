use crate::generator::ConfigRenderer;
use crate::settings::Settings;

/// Application state structure for the web server
///
/// Built once at startup and shared read-only between workers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Settings the server was started with
    pub config: Settings,

    /// Renderer configured with the startup base config and template variant
    pub renderer: ConfigRenderer,
}

impl AppState {
    /// Create a new AppState instance
    pub fn new(config: Settings) -> Self {
        let renderer = ConfigRenderer::new(config.base.clone(), config.variant);
        Self { config, renderer }
    }
}
