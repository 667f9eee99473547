//! Application context: the resolved configuration and the generator bound
//! to it, built once in `main` and passed by reference.

use anyhow::{Context, Result};

use hrgt_core::{ConfigOptions, GenerationConfig};
use hrgt_generator::Generator;

use crate::Cli;

pub struct AppContext {
    pub generator: Generator,
}

impl AppContext {
    /// Merge defaults ← config file ← CLI flags and bind a generator.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config = resolve_config(cli)?;
        Ok(AppContext {
            generator: Generator::new(config),
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        self.generator.config()
    }
}

pub(crate) fn resolve_config(cli: &Cli) -> Result<GenerationConfig> {
    let file = match &cli.config {
        Some(path) => ConfigOptions::load_at(path)
            .with_context(|| format!("failed to read or parse the config file '{}'", path.display()))?,
        None => ConfigOptions::default(),
    };
    file.merge(cli.overrides())
        .resolve()
        .context("invalid configuration")
}
