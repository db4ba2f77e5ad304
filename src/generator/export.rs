use std::path::Path;

use log::info;
use thiserror::Error;

use crate::generator::{ConfigRenderer, RenderedDocument};
use crate::models::RenderError;
use crate::utils::parse_query_string;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render a raw query string once and write the document to `path`
///
/// A leading `?` is ignored. Nothing is written when validation fails.
pub fn render_query_to_file(
    renderer: &ConfigRenderer,
    query: &str,
    path: impl AsRef<Path>,
) -> Result<RenderedDocument, ExportError> {
    let path = path.as_ref();
    let params = parse_query_string(query.trim_start_matches('?'));
    let document = renderer.render(&params)?;
    std::fs::write(path, document.as_str())?;
    info!(
        "Wrote {} bytes of config to {}",
        document.len(),
        path.display()
    );
    Ok(document)
}
