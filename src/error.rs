//! Error handling for dataset loading operations.
//!
//! Separates I/O failures (missing files, missing block directories) from
//! format failures (column layout mismatches, unparseable values) and keeps
//! the path that was being read so callers can report it.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list block directory {path}: {source}")]
    DirectoryListing {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Schema mismatch in file {path}: expected {expected} columns, found {found}")]
    SchemaMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: polars::error::PolarsError,
    },

    #[error("Path pattern '{pattern}' must contain exactly one block placeholder, found {placeholders}")]
    InvalidPattern { pattern: String, placeholders: usize },

    #[error("Invalid glob pattern '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Unknown dataset: {name}")]
    UnknownDataset { name: String },
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: polars::error::PolarsError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for failures raised by the file system rather than the parser.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::DirectoryListing { .. })
    }

    /// True when the file or directory being read does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == ErrorKind::NotFound,
            Self::DirectoryListing { source, .. } => source
                .io_error()
                .is_some_and(|e| e.kind() == ErrorKind::NotFound),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
