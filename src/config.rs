//! Configuration for dataset sources.
//!
//! Provides the per-source parser options and the data root shared by the
//! sources of one catalog.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// How the first row of a file is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeaderRow {
    /// First row is a header; it is dropped and the declared names are used
    #[default]
    Discard,
    /// Every row is data
    Absent,
}

impl HeaderRow {
    pub fn has_header(self) -> bool {
        matches!(self, HeaderRow::Discard)
    }
}

/// Text encoding of the file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1, one byte per character
    Latin1,
}

impl TextEncoding {
    /// Convert raw file bytes to UTF-8 for the parser
    pub fn decode(self, bytes: Vec<u8>) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => bytes,
            // Latin-1 bytes map one-to-one onto U+0000..=U+00FF
            TextEncoding::Latin1 => bytes
                .into_iter()
                .map(char::from)
                .collect::<String>()
                .into_bytes(),
        }
    }
}

/// Parser configuration applied when a source is loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Header row handling
    pub header: HeaderRow,

    /// Encoding of the file contents
    pub encoding: TextEncoding,

    /// strptime format for the date columns (inferred when absent)
    pub datetime_format: Option<String>,

    /// Rows sampled to infer the types of non-date columns (None = all rows)
    pub infer_schema_length: Option<usize>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            header: HeaderRow::Discard,
            encoding: TextEncoding::Utf8,
            datetime_format: None,
            infer_schema_length: None,
        }
    }
}

impl ParserOptions {
    pub fn with_header(mut self, header: HeaderRow) -> Self {
        self.header = header;
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = Some(format.into());
        self
    }

    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }
}

/// Base directory against which every relative dataset path of a catalog is
/// resolved. Clones share the same allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataRoot(Arc<PathBuf>);

impl DataRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(Arc::new(path.into()))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Whether no root directory was given; paths then resolve against the
    /// working directory
    pub fn is_unset(&self) -> bool {
        self.0.as_os_str().is_empty()
    }

    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.0.join(relative)
    }
}

impl From<&str> for DataRoot {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for DataRoot {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for DataRoot {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}
