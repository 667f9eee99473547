//! Error types for hrgt-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while a glossary source produces entries.
#[derive(Debug, Error)]
pub enum GlossaryError {
    /// The glossary file could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load: includes file path and line context from serde_yaml.
    #[error("failed to parse glossary at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// No input was given and the scope has no administration file.
    #[error("scope administration file not found at {path}")]
    MissingSaf { path: PathBuf },

    /// The SAF exists but does not name a default MRG file.
    #[error("SAF at {path} does not define scope.mrgfile")]
    NoDefaultMrg { path: PathBuf },
}

/// Errors raised while resolving a generation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML or contains unrecognised keys.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `method` named something other than `html` / `handlebars` / `mustache`.
    #[error("unknown render method '{0}'; expected: html, handlebars, mustache")]
    UnknownMethod(String),

    /// The Markdown-capable method was selected without a template path.
    #[error("render method '{method}' requires a template file")]
    MissingTemplate { method: String },
}

pub(crate) fn glossary_io_err(path: impl Into<PathBuf>, source: std::io::Error) -> GlossaryError {
    GlossaryError::Io {
        path: path.into(),
        source,
    }
}
