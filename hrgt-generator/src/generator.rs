//! Generation pipeline: glossary source → entries → template → file.
//!
//! ## `generate`: 5 steps
//!
//! 1. Validate the bound configuration.
//! 2. Request glossary data: once per glob match, in match order, or once
//!    with no locator when no input pattern is configured.
//! 3. Flatten all outputs into one ordered entry list.
//! 4. Load the selected template backend and render.
//! 5. Atomically write `<scopedir>/<output>.html`.
//!
//! Each step runs to completion before the next starts. The first failure
//! is logged with its step and path, then returned; nothing is written
//! unless rendering succeeded.

use std::fmt;
use std::path::{Path, PathBuf};

use hrgt_core::{flatten, Entry, GenerationConfig, GlossarySource, MrgGlossary, Output};
use hrgt_renderer::{RenderError, TemplateRenderer};

use crate::error::GenerationError;
use crate::writer;

/// Status string reported on success.
pub const SUCCESS_STATUS: &str = "Generation completed successfully";

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    /// Number of fragments requested from the glossary source.
    pub fragments: usize,
    pub entry_count: usize,
    pub bytes_written: usize,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SUCCESS_STATUS)
    }
}

/// Expand `pattern` relative to `scopedir` into matching paths, in match order.
///
/// Absolute patterns are used as-is. The scope directory itself is escaped
/// so that metacharacters in its name match literally.
pub fn expand_input(scopedir: &Path, pattern: &str) -> Result<Vec<PathBuf>, GenerationError> {
    let full = if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        let base = glob::Pattern::escape(&scopedir.to_string_lossy());
        format!("{}/{}", base.trim_end_matches('/'), pattern)
    };
    let paths = glob::glob(&full).map_err(|source| GenerationError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(paths.collect::<Result<Vec<_>, _>>()?)
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Orchestrates one glossary-to-document run per [`generate`](Self::generate) call.
#[derive(Debug)]
pub struct Generator<S = MrgGlossary> {
    config: GenerationConfig,
    source: S,
}

impl Generator<MrgGlossary> {
    /// Bind an [`MrgGlossary`] rooted at the configured scope directory.
    pub fn new(config: GenerationConfig) -> Self {
        let source = MrgGlossary::new(config.scopedir.clone());
        Self::with_source(config, source)
    }
}

impl<S: GlossarySource> Generator<S> {
    /// Bind an arbitrary glossary source.
    pub fn with_source(config: GenerationConfig, source: S) -> Self {
        tracing::info!("{}", config.describe());
        Generator { config, source }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Run the pipeline once.
    pub async fn generate(&self) -> Result<GenerationReport, GenerationError> {
        match self.run().await {
            Ok(report) => {
                tracing::info!("{SUCCESS_STATUS}");
                Ok(report)
            }
            Err(e) => {
                tracing::error!(kind = %e.kind(), "Generation failed: {e}");
                Err(e)
            }
        }
    }

    async fn run(&self) -> Result<GenerationReport, GenerationError> {
        self.config
            .validate()
            .inspect_err(|e| tracing::error!("invalid configuration: {e}"))?;

        let outputs = self.collect_outputs().await?;
        let fragments = outputs.len();
        let entries = flatten(outputs);
        tracing::info!("{} Entries", entries.len());

        let document = self.render(&entries).await?;

        let path = self.config.output_path();
        let bytes_written = writer::write_document(&path, &document)
            .await
            .inspect_err(|e| tracing::error!("Failed to write data to file at {}: {e}", path.display()))?;
        tracing::info!("Data successfully written to {}", path.display());

        Ok(GenerationReport {
            output_path: path,
            fragments,
            entry_count: entries.len(),
            bytes_written,
        })
    }

    /// Step 2: one `initialize` per fragment, strictly in order.
    async fn collect_outputs(&self) -> Result<Vec<Output>, GenerationError> {
        let Some(pattern) = self.config.input.as_deref() else {
            let output = self.initialize(None).await?;
            return Ok(vec![output]);
        };

        let files = expand_input(&self.config.scopedir, pattern)
            .inspect_err(|e| tracing::error!("cannot expand input '{pattern}': {e}"))?;
        if files.is_empty() {
            tracing::warn!("input pattern '{pattern}' matched no files");
        }

        let mut outputs = Vec::with_capacity(files.len());
        for file in &files {
            outputs.push(self.initialize(Some(file)).await?);
        }
        Ok(outputs)
    }

    async fn initialize(&self, file: Option<&Path>) -> Result<Output, GenerationError> {
        let locator = match file {
            Some(path) => path.display().to_string(),
            None => "(default MRG)".to_string(),
        };
        tracing::debug!("requesting glossary {locator}");
        self.source.initialize(file).await.map_err(|source| {
            tracing::error!("glossary source failed for {locator}: {source}");
            GenerationError::GlossarySource { locator, source }
        })
    }

    /// Step 4: template load + render. Any failure aborts before the write.
    async fn render(&self, entries: &[Entry]) -> Result<String, GenerationError> {
        let renderer = TemplateRenderer::load(
            self.config.method,
            &self.config.scopedir,
            self.config.template.as_deref(),
        )
        .await
        .map_err(render_failed)?;
        renderer.render(entries).map_err(render_failed)
    }
}

fn render_failed(e: RenderError) -> GenerationError {
    tracing::error!("Failed to generate HTML: {e}");
    GenerationError::Template(e)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
