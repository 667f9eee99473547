//! hrgt core library: glossary domain types, configuration, glossary
//! sources and entry aggregation.
//!
//! - [`types`]: [`Entry`], [`Output`], [`RenderMethod`]
//! - [`config`]: [`ConfigOptions`] → [`GenerationConfig`]
//! - [`glossary`]: the [`GlossarySource`] seam and the MRG file reader
//! - [`aggregate`]: flattening outputs into one ordered entry list
//! - [`error`]: [`GlossaryError`], [`ConfigError`]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod glossary;
pub mod types;

pub use aggregate::flatten;
pub use config::{ConfigOptions, GenerationConfig, DEFAULT_OUTPUT, DEFAULT_TEMPLATE};
pub use error::{ConfigError, GlossaryError};
pub use glossary::{GlossarySource, MrgGlossary};
pub use types::{Entry, Output, RenderMethod, TermId};
