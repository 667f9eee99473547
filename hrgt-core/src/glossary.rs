//! Glossary sources: where entries come from.
//!
//! # File layout read by [`MrgGlossary`]
//!
//! ```text
//! <scopedir>/
//!   saf.yaml                  (scope.glossarydir, scope.mrgfile)
//!   <glossarydir>/
//!     <mrgfile>               (terminology + entries)
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{glossary_io_err, GlossaryError};
use crate::types::{Entry, Output};

/// File name of the scope administration file inside a scope directory.
pub const SAF_FILE: &str = "saf.yaml";

/// Producer of glossary entries.
///
/// `file == None` asks the source for its own default fragment.
#[async_trait]
pub trait GlossarySource: Send + Sync {
    async fn initialize(&self, file: Option<&Path>) -> Result<Output, GlossaryError>;
}

// ---------------------------------------------------------------------------
// On-disk shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Saf {
    scope: SafScope,
}

#[derive(Debug, Default, Deserialize)]
struct SafScope {
    #[serde(default)]
    glossarydir: Option<PathBuf>,
    #[serde(default)]
    mrgfile: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct Terminology {
    #[serde(default)]
    scopetag: String,
    #[serde(default)]
    vsntag: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MrgFile {
    #[serde(default)]
    terminology: Terminology,
    #[serde(default)]
    entries: Vec<Entry>,
}

impl MrgFile {
    /// Entries inherit the terminology's tags where they carry none.
    fn into_output(self) -> Output {
        let Terminology { scopetag, vsntag } = self.terminology;
        let entries = self
            .entries
            .into_iter()
            .map(|mut entry| {
                if entry.scopetag.is_empty() {
                    entry.scopetag = scopetag.clone();
                }
                if entry.vsntag.is_none() {
                    entry.vsntag = vsntag.clone();
                }
                entry
            })
            .collect();
        Output { entries }
    }
}

// ---------------------------------------------------------------------------
// MrgGlossary
// ---------------------------------------------------------------------------

/// Reads machine-readable glossary (MRG) YAML files from a scope directory.
#[derive(Debug, Clone)]
pub struct MrgGlossary {
    scopedir: PathBuf,
}

impl MrgGlossary {
    pub fn new(scopedir: impl Into<PathBuf>) -> Self {
        Self {
            scopedir: scopedir.into(),
        }
    }

    pub fn scopedir(&self) -> &Path {
        &self.scopedir
    }

    /// `<scopedir>/<glossarydir>/<mrgfile>` as named by the SAF.
    pub async fn default_mrg_path(&self) -> Result<PathBuf, GlossaryError> {
        let saf_path = self.scopedir.join(SAF_FILE);
        let contents = match tokio::fs::read_to_string(&saf_path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(GlossaryError::MissingSaf { path: saf_path });
            }
            Err(e) => return Err(glossary_io_err(&saf_path, e)),
        };
        let saf: Saf = serde_yaml::from_str(&contents).map_err(|source| GlossaryError::Parse {
            path: saf_path.clone(),
            source,
        })?;
        let mrgfile = saf
            .scope
            .mrgfile
            .ok_or(GlossaryError::NoDefaultMrg { path: saf_path })?;
        let mut path = self.scopedir.clone();
        if let Some(dir) = saf.scope.glossarydir {
            path.push(dir);
        }
        path.push(mrgfile);
        Ok(path)
    }

    async fn load(&self, path: &Path) -> Result<Output, GlossaryError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| glossary_io_err(path, e))?;
        let mrg: MrgFile = serde_yaml::from_str(&contents).map_err(|source| GlossaryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let output = mrg.into_output();
        tracing::debug!("read {} entries from {}", output.entries.len(), path.display());
        Ok(output)
    }
}

#[async_trait]
impl GlossarySource for MrgGlossary {
    async fn initialize(&self, file: Option<&Path>) -> Result<Output, GlossaryError> {
        match file {
            Some(path) => self.load(path).await,
            None => {
                let path = self.default_mrg_path().await?;
                self.load(&path).await
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
