//! Error types for hrgt-generator.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use hrgt_core::{ConfigError, GlossaryError};
use hrgt_renderer::RenderError;

/// Run-level failure returned by [`Generator::generate`](crate::Generator::generate).
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The configuration cannot produce a document.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The input glob is not a valid pattern.
    #[error("invalid input pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A path matched by the input glob could not be inspected.
    #[error("failed to expand input pattern: {0}")]
    Glob(#[from] glob::GlobError),

    /// The glossary source failed for one requested fragment.
    #[error("glossary source failed for {locator}: {source}")]
    GlossarySource {
        locator: String,
        #[source]
        source: GlossaryError,
    },

    /// Template missing, malformed, or failed while rendering.
    #[error("template error: {0}")]
    Template(#[from] RenderError),

    /// The rendered document could not be persisted.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a [`GenerationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    GlossarySource,
    Template,
    Write,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "configuration"),
            ErrorKind::GlossarySource => write!(f, "glossary source"),
            ErrorKind::Template => write!(f, "template"),
            ErrorKind::Write => write!(f, "write"),
        }
    }
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::Configuration(_) | GenerationError::Pattern { .. } => {
                ErrorKind::Configuration
            }
            GenerationError::Glob(_) | GenerationError::GlossarySource { .. } => {
                ErrorKind::GlossarySource
            }
            GenerationError::Template(_) => ErrorKind::Template,
            GenerationError::Write { .. } => ErrorKind::Write,
        }
    }
}

/// Convenience constructor for [`GenerationError::Write`].
pub(crate) fn write_err(path: impl Into<PathBuf>, source: std::io::Error) -> GenerationError {
    GenerationError::Write {
        path: path.into(),
        source,
    }
}
