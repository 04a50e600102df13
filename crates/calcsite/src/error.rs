// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

/// Errors that abort a generation run.
///
/// None of these are recoverable per record: one bad record fails the whole
/// site.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Catalog JSON is malformed
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog record does not match the record schema
    #[error("Catalog record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog record is missing a required field
    #[error("Catalog record {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// Record lacks the UI metadata needed to build a page
    #[error("Cannot render '{slug}': {reason}")]
    Render { slug: String, reason: String },

    /// Site configuration is malformed
    #[error("Invalid site config: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    /// Filesystem failure while reading input or writing output
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn render<S: Into<String>>(slug: &str, reason: S) -> Self {
        Error::Render {
            slug: slug.to_string(),
            reason: reason.into(),
        }
    }

    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for failures reading or validating the catalog.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            Error::Parse(_) | Error::InvalidRecord { .. } | Error::MissingField { .. }
        )
    }
}

/// Result type for calcsite operations
pub type Result<T> = std::result::Result<T, Error>;
