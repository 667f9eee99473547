//! Generation configuration.
//!
//! [`ConfigOptions`] is the loosely-filled shape read from a YAML file or
//! assembled from CLI flags; every field is optional. [`ConfigOptions::resolve`]
//! applies defaults and produces the immutable [`GenerationConfig`] a run uses.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (merged by the caller via [`ConfigOptions::merge`])
//! 2. Config file ([`ConfigOptions::load_at`])
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::RenderMethod;

/// Default output base name; the artifact is `<scopedir>/index.html`.
pub const DEFAULT_OUTPUT: &str = "index";

/// Template used by the `html` method when none is configured, relative to
/// the working directory.
pub const DEFAULT_TEMPLATE: &str = "template.mustache";

/// Fully resolved configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub method: RenderMethod,
    /// Base directory for glob inputs, the SAF and the output artifact.
    pub scopedir: PathBuf,
    /// Glob pattern selecting MRG files. `None` asks the source for its default.
    pub input: Option<String>,
    /// Output base name, without extension.
    pub output: String,
    /// Template file for [`RenderMethod::Html`]; resolved against the working directory.
    pub template: Option<PathBuf>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            method: RenderMethod::default(),
            scopedir: PathBuf::from("."),
            input: None,
            output: DEFAULT_OUTPUT.to_string(),
            template: Some(PathBuf::from(DEFAULT_TEMPLATE)),
        }
    }
}

impl GenerationConfig {
    /// `<scopedir>/<output>.html`: pure, no I/O.
    pub fn output_path(&self) -> PathBuf {
        self.scopedir.join(format!("{}.html", self.output))
    }

    /// Reject configurations that cannot produce a document.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.method.requires_template() && self.template.is_none() {
            return Err(ConfigError::MissingTemplate {
                method: self.method.to_string(),
            });
        }
        Ok(())
    }

    /// One-line summary used for the startup log entry.
    pub fn describe(&self) -> String {
        format!(
            "Using {} method with MRG {} generating to {} in scopedir {}",
            self.method,
            self.input.as_deref().unwrap_or("(from SAF scope.mrgfile)"),
            self.output,
            self.scopedir.display()
        )
    }
}

/// Every recognised configuration key. Unknown keys are a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOptions {
    pub method: Option<String>,
    pub scopedir: Option<PathBuf>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub template: Option<PathBuf>,
}

impl ConfigOptions {
    /// Load options from a YAML file. An empty file yields all-`None`.
    pub fn load_at(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Layer `overrides` on top of `self`; any `Some` in `overrides` wins.
    pub fn merge(self, overrides: ConfigOptions) -> ConfigOptions {
        ConfigOptions {
            method: overrides.method.or(self.method),
            scopedir: overrides.scopedir.or(self.scopedir),
            input: overrides.input.or(self.input),
            output: overrides.output.or(self.output),
            template: overrides.template.or(self.template),
        }
    }

    /// Apply defaults and parse the method name.
    pub fn resolve(self) -> Result<GenerationConfig, ConfigError> {
        let defaults = GenerationConfig::default();
        let method = match self.method {
            Some(name) => name.parse()?,
            None => defaults.method,
        };
        Ok(GenerationConfig {
            method,
            scopedir: self.scopedir.unwrap_or(defaults.scopedir),
            input: self.input.or(defaults.input),
            output: self.output.unwrap_or(defaults.output),
            template: self.template.or(defaults.template),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
