//! Domain types for glossary generation.
//!
//! Entries are produced by a [`GlossarySource`](crate::glossary::GlossarySource)
//! and are never mutated afterwards; the renderer works on copies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed identifier for a glossary term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TermId(pub String);

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TermId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TermId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// One resolved glossary term.
///
/// Field names on the wire match the MRG file format (`glossaryText`), which
/// is also what templates see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(alias = "termid")]
    pub id: TermId,
    pub term: String,
    #[serde(default)]
    pub scopetag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vsntag: Option<String>,
    #[serde(default)]
    pub glossary_text: String,
}

impl Entry {
    /// Convenience constructor used by sources that build entries in code.
    pub fn new(
        id: impl Into<TermId>,
        term: impl Into<String>,
        scopetag: impl Into<String>,
        glossary_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            term: term.into(),
            scopetag: scopetag.into(),
            vsntag: None,
            glossary_text: glossary_text.into(),
        }
    }

    /// Builder-style setter for the version tag.
    pub fn with_vsntag(mut self, vsntag: impl Into<String>) -> Self {
        self.vsntag = Some(vsntag.into());
        self
    }
}

/// The entries produced from one glossary fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Output {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl From<Vec<Entry>> for Output {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

// ---------------------------------------------------------------------------
// Render method
// ---------------------------------------------------------------------------

/// Which template backend renders the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderMethod {
    /// Escaping Handlebars templates with a Markdown pass over every definition.
    #[default]
    #[serde(alias = "handlebars")]
    Html,
    /// Plain mustache-style substitution; definitions are inserted verbatim.
    Mustache,
}

impl RenderMethod {
    /// Whether this method requires an explicit template path.
    pub fn requires_template(&self) -> bool {
        matches!(self, RenderMethod::Html)
    }
}

impl fmt::Display for RenderMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMethod::Html => write!(f, "html"),
            RenderMethod::Mustache => write!(f, "mustache"),
        }
    }
}

impl FromStr for RenderMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" | "handlebars" => Ok(RenderMethod::Html),
            "mustache" => Ok(RenderMethod::Mustache),
            _ => Err(ConfigError::UnknownMethod(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
