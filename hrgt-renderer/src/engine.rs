//! Template backends: [`TemplateRenderer`] and its two variants.
//!
//! | Method     | Engine     | Template source                 | Definition text     |
//! |------------|------------|---------------------------------|---------------------|
//! | `html`     | Handlebars | configured `template` path      | Markdown → HTML     |
//! | `mustache` | Handlebars | `<scopedir>/template.mustache`  | inserted verbatim   |
//!
//! Both backends compile their template once when loaded and render the whole
//! entry list in a single pass. The `html` registry keeps Handlebars' HTML
//! escaping, so converted definitions are inserted with `{{{glossaryText}}}`.
//! The `mustache` registry escapes nothing.

use std::path::{Path, PathBuf};

use handlebars::Handlebars;

use hrgt_core::{Entry, RenderMethod};

use crate::context::TemplateContext;
use crate::error::{io_err, RenderError};

/// Conventional file name of the raw-substitution template inside a scope.
pub const RAW_TEMPLATE_FILE: &str = "template.mustache";

const TEMPLATE_NAME: &str = "glossary";

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

async fn read_template(path: &Path) -> Result<String, RenderError> {
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| io_err(path, e))?;
    tracing::debug!("read template {} ({} bytes)", path.display(), source.len());
    Ok(source)
}

/// Path the `mustache` method reads its template from.
pub fn raw_template_path(scopedir: &Path) -> PathBuf {
    scopedir.join(RAW_TEMPLATE_FILE)
}

// ---------------------------------------------------------------------------
// TemplateRenderer
// ---------------------------------------------------------------------------

/// A compiled template, ready to render an ordered entry list.
pub enum TemplateRenderer {
    /// Escaping Handlebars templates with a Markdown pass over each definition.
    Markdown { handlebars: Handlebars<'static> },
    /// Mustache-style substitution (Handlebars), no Markdown pass.
    Raw { handlebars: Handlebars<'static> },
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TemplateRenderer")
            .field(&self.method())
            .finish()
    }
}

impl TemplateRenderer {
    /// Read and compile the template selected by `method`.
    ///
    /// `template` is only consulted for [`RenderMethod::Html`]; the
    /// `mustache` method always reads [`RAW_TEMPLATE_FILE`] from `scopedir`.
    pub async fn load(
        method: RenderMethod,
        scopedir: &Path,
        template: Option<&Path>,
    ) -> Result<Self, RenderError> {
        match method {
            RenderMethod::Html => {
                let path = template.ok_or(RenderError::MissingTemplate)?;
                Self::markdown(&read_template(path).await?)
            }
            RenderMethod::Mustache => {
                let path = raw_template_path(scopedir);
                Self::raw(&read_template(&path).await?)
            }
        }
    }

    /// Compile a Handlebars template for the Markdown-capable method.
    pub fn markdown(source: &str) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string(TEMPLATE_NAME, source)?;
        Ok(TemplateRenderer::Markdown { handlebars })
    }

    /// Compile a mustache-style template for the raw-substitution method.
    pub fn raw(source: &str) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_template_string(TEMPLATE_NAME, source)?;
        Ok(TemplateRenderer::Raw { handlebars })
    }

    pub fn method(&self) -> RenderMethod {
        match self {
            TemplateRenderer::Markdown { .. } => RenderMethod::Html,
            TemplateRenderer::Raw { .. } => RenderMethod::Mustache,
        }
    }

    /// Render `entries` in the order given.
    pub fn render(&self, entries: &[Entry]) -> Result<String, RenderError> {
        match self {
            TemplateRenderer::Markdown { handlebars } => {
                let data = TemplateContext::with_markdown(entries).to_json()?;
                Ok(handlebars.render(TEMPLATE_NAME, &data)?)
            }
            TemplateRenderer::Raw { handlebars } => {
                let data = TemplateContext::verbatim(entries).to_json()?;
                Ok(handlebars.render(TEMPLATE_NAME, &data)?)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
