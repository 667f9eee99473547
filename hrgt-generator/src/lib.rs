//! # hrgt-generator
//!
//! Glossary generation pipeline and atomic output writer.
//!
//! Build a [`Generator`] from a resolved [`GenerationConfig`](hrgt_core::GenerationConfig)
//! and call [`Generator::generate`] to render `<scopedir>/<output>.html`.

pub mod error;
pub mod generator;
pub mod writer;

pub use error::{ErrorKind, GenerationError};
pub use generator::{expand_input, GenerationReport, Generator, SUCCESS_STATUS};
pub use writer::write_document;
