pub mod clash;
pub mod export;

pub use clash::{BaseConfig, ConfigRenderer, RenderedDocument};
pub use export::{render_query_to_file, ExportError};
