//! Template context: serializable rendering payload built from glossary entries.

use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;

use hrgt_core::Entry;

use crate::error::RenderError;

/// Payload handed to either template backend.
///
/// Templates iterate `entries`; each element exposes `id`, `term`,
/// `scopetag`, `vsntag` and `glossaryText`.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    pub entries: Vec<Entry>,
    pub meta: MetaCtx,
}

/// Run metadata. Contains nothing time- or environment-dependent so that
/// identical input renders identically.
#[derive(Debug, Clone, Serialize)]
pub struct MetaCtx {
    pub hrgt_version: String,
    pub entry_count: usize,
}

impl TemplateContext {
    /// Context with definition text left exactly as the source produced it.
    pub fn verbatim(entries: &[Entry]) -> Self {
        Self::build(entries.to_vec())
    }

    /// Context with every definition converted from Markdown to HTML.
    ///
    /// Works on copies; `entries` is left untouched.
    pub fn with_markdown(entries: &[Entry]) -> Self {
        let converted = entries
            .iter()
            .map(|e| Entry {
                glossary_text: markdown_to_html(&e.glossary_text),
                ..e.clone()
            })
            .collect();
        Self::build(converted)
    }

    fn build(entries: Vec<Entry>) -> Self {
        let entry_count = entries.len();
        TemplateContext {
            entries,
            meta: MetaCtx {
                hrgt_version: env!("CARGO_PKG_VERSION").to_string(),
                entry_count,
            },
        }
    }

    /// Convert to the JSON value both Handlebars registries render from.
    pub fn to_json(&self) -> Result<serde_json::Value, RenderError> {
        serde_json::to_value(self).map_err(RenderError::from)
    }
}

/// Render a Markdown fragment to HTML (GFM tables and strikethrough enabled).
pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(text, options);
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
