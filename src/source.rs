//! Single-file and block-partitioned dataset sources.
//!
//! Both kinds hold a `SourceDescriptor` and the `DataRoot` of the catalog that
//! built them. Nothing is read until `load` is called.

use crate::config::{DataRoot, ParserOptions};
use crate::error::{CatalogError, Result};
use crate::layout;
use crate::models::{DatasetName, DatasetSummary, SourceDescriptor, SourceKind};
use crate::reader::read_frame;
use polars::prelude::DataFrame;
use std::path::PathBuf;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Behaviour shared by both source kinds
pub trait DataSource {
    fn descriptor(&self) -> &SourceDescriptor;

    fn root(&self) -> &DataRoot;

    fn kind(&self) -> SourceKind;

    fn column_names(&self) -> &[String] {
        &self.descriptor().names
    }

    fn date_columns(&self) -> &[String] {
        &self.descriptor().dates
    }
}

/// One whole, non-partitioned CSV file
#[derive(Debug, Clone)]
pub struct SingleFileSource {
    root: DataRoot,
    descriptor: SourceDescriptor,
}

impl SingleFileSource {
    pub fn new<I, S>(root: DataRoot, path: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root,
            descriptor: SourceDescriptor::new(path, names),
        }
    }

    pub fn with_dates<I, S>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor.dates = dates.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.descriptor.options = options;
        self
    }

    /// Absolute path of the file
    pub fn file_path(&self) -> PathBuf {
        self.root.join(&self.descriptor.path)
    }

    /// Parse the whole file
    pub fn load(&self) -> Result<DataFrame> {
        let path = self.file_path();
        debug!("Loading {}", path.display());
        read_frame(&path, &self.descriptor)
    }
}

impl DataSource for SingleFileSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    fn root(&self) -> &DataRoot {
        &self.root
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Single
    }
}

/// A CSV dataset split across numbered block files in one directory
#[derive(Debug, Clone)]
pub struct PartitionedFileSource {
    root: DataRoot,
    descriptor: SourceDescriptor,
}

impl PartitionedFileSource {
    pub fn new<I, S>(root: DataRoot, pattern: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root,
            descriptor: SourceDescriptor::new(pattern, names),
        }
    }

    pub fn with_dates<I, S>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor.dates = dates.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.descriptor.options = options;
        self
    }

    /// Absolute path of block `block`
    pub fn block_path(&self, block: usize) -> Result<PathBuf> {
        layout::block_path(&self.root, &self.descriptor.path, block)
    }

    /// Directory holding the block files
    pub fn block_directory(&self) -> PathBuf {
        layout::block_directory(&self.root, &self.descriptor.path)
    }

    /// Parse one block file
    pub fn load(&self, block: usize) -> Result<DataFrame> {
        let path = self.block_path(block)?;
        debug!("Loading block {} from {}", block, path.display());
        read_frame(&path, &self.descriptor)
    }

    /// Number of entries in the block directory.
    ///
    /// Every entry is counted, including files that are not blocks, so this is
    /// an upper bound on the number of loadable blocks. See
    /// [`matching_block_count`](Self::matching_block_count) for an exact count.
    pub fn block_count(&self) -> Result<usize> {
        let directory = self.block_directory();
        let mut count = 0;
        for entry in WalkDir::new(&directory).min_depth(1).max_depth(1) {
            entry.map_err(|source| CatalogError::DirectoryListing {
                path: directory.clone(),
                source,
            })?;
            count += 1;
        }
        debug!("{} entries in {}", count, directory.display());
        Ok(count)
    }

    /// Block files matching the path pattern, sorted by path
    pub fn block_paths(&self) -> Result<Vec<PathBuf>> {
        let directory = self.block_directory();
        if !directory.is_dir() {
            return Err(CatalogError::io(
                &directory,
                std::io::Error::new(std::io::ErrorKind::NotFound, "block directory not found"),
            ));
        }

        let pattern = layout::block_glob(&self.root, &self.descriptor.path)?;
        let paths = glob::glob(&pattern).map_err(|source| CatalogError::Glob {
            pattern: pattern.clone(),
            source,
        })?;

        let mut blocks = Vec::new();
        for path in paths {
            let path = path.map_err(|e| {
                let source = std::io::Error::new(e.error().kind(), e.to_string());
                CatalogError::io(e.path(), source)
            })?;
            if path.is_file() {
                blocks.push(path);
            }
        }
        blocks.sort();
        Ok(blocks)
    }

    /// Number of files in the block directory that match the path pattern
    pub fn matching_block_count(&self) -> Result<usize> {
        let matching = self.block_paths()?.len();
        let total = self.block_count()?;
        if total > matching {
            warn!(
                "{} of {} entries in {} are not block files",
                total - matching,
                total,
                self.block_directory().display()
            );
        }
        Ok(matching)
    }
}

impl DataSource for PartitionedFileSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    fn root(&self) -> &DataRoot {
        &self.root
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Partitioned
    }
}

/// A borrowed catalog entry of either kind
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Single(&'a SingleFileSource),
    Partitioned(&'a PartitionedFileSource),
}

impl<'a> Source<'a> {
    pub fn as_single(&self) -> Option<&'a SingleFileSource> {
        match *self {
            Source::Single(source) => Some(source),
            Source::Partitioned(_) => None,
        }
    }

    pub fn as_partitioned(&self) -> Option<&'a PartitionedFileSource> {
        match *self {
            Source::Partitioned(source) => Some(source),
            Source::Single(_) => None,
        }
    }

    pub fn describe(&self, name: DatasetName) -> DatasetSummary {
        let descriptor = self.descriptor();
        DatasetSummary {
            name,
            kind: self.kind(),
            path: descriptor.path.clone(),
            column_count: descriptor.names.len(),
            date_columns: descriptor.dates.clone(),
        }
    }
}

impl DataSource for Source<'_> {
    fn descriptor(&self) -> &SourceDescriptor {
        match self {
            Source::Single(source) => source.descriptor(),
            Source::Partitioned(source) => source.descriptor(),
        }
    }

    fn root(&self) -> &DataRoot {
        match self {
            Source::Single(source) => source.root(),
            Source::Partitioned(source) => source.root(),
        }
    }

    fn kind(&self) -> SourceKind {
        match self {
            Source::Single(_) => SourceKind::Single,
            Source::Partitioned(_) => SourceKind::Partitioned,
        }
    }
}

impl<'a> From<&'a SingleFileSource> for Source<'a> {
    fn from(source: &'a SingleFileSource) -> Self {
        Source::Single(source)
    }
}

impl<'a> From<&'a PartitionedFileSource> for Source<'a> {
    fn from(source: &'a PartitionedFileSource) -> Self {
        Source::Partitioned(source)
    }
}
