//! Smart Meter Catalog Library
//!
//! Declarative loaders for the London smart-meter dataset family: half-hourly
//! and daily household energy readings, Acorn demographic details, household
//! information, UK bank holidays, and DarkSky daily/hourly weather.
//!
//! This library provides:
//! - A fixed catalog naming every dataset and its column layout
//! - Single-file sources loaded with one call
//! - Block-partitioned sources loaded one numbered block at a time
//! - Parsing into Polars `DataFrame`s with declared column names and
//!   timestamp-typed date columns
//!
//! ```no_run
//! use smart_meter_catalog::build_catalog;
//!
//! let catalog = build_catalog("/data/smart-meters");
//! let holidays = catalog.holidays().load()?;
//! let first_block = catalog.halfhourly_data().load(0)?;
//! let blocks = catalog.halfhourly_data().block_count()?;
//! # Ok::<(), smart_meter_catalog::CatalogError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod models;
pub mod reader;
pub mod source;

pub use catalog::{Catalog, build_catalog};
pub use config::{DataRoot, HeaderRow, ParserOptions, TextEncoding};
pub use error::{CatalogError, Result};
pub use models::{DatasetName, DatasetSummary, SourceDescriptor, SourceKind};
pub use source::{DataSource, PartitionedFileSource, SingleFileSource, Source};
