//! Entry aggregation across glossary fragments.

use crate::types::{Entry, Output};

/// Concatenate the entries of every output, bundle order first.
///
/// Duplicate ids are kept; a term defined in two fragments appears twice.
pub fn flatten(outputs: Vec<Output>) -> Vec<Entry> {
    outputs.into_iter().flat_map(|o| o.entries).collect()
}
