//! Error types for hrgt-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template loading and rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template file could not be located or read.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The Markdown-capable method was asked to load without a template path.
    #[error("no template file configured for the html method")]
    MissingTemplate,

    /// Handlebars could not compile the template.
    #[error("template is malformed: {0}")]
    HandlebarsTemplate(#[from] handlebars::TemplateError),

    /// Handlebars failed while rendering.
    #[error("template render error: {0}")]
    HandlebarsRender(#[from] handlebars::RenderError),

    /// JSON serialization error (building the render payload).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}
