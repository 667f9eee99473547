//! # hrgt-renderer
//!
//! Renders an ordered list of glossary entries into a single document using
//! either an escaping Handlebars template (with Markdown definitions) or a
//! non-escaping mustache-style template (definitions verbatim).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hrgt_core::Entry;
//! use hrgt_renderer::TemplateRenderer;
//!
//! fn render(entries: &[Entry]) -> Result<String, hrgt_renderer::RenderError> {
//!     let renderer = TemplateRenderer::markdown(
//!         "{{#each entries}}<h2>{{term}}</h2>{{{glossaryText}}}{{/each}}",
//!     )?;
//!     renderer.render(entries)
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::{markdown_to_html, TemplateContext};
pub use engine::{raw_template_path, TemplateRenderer, RAW_TEMPLATE_FILE};
pub use error::RenderError;
