//! Core data structures for describing datasets.
//!
//! Defines the dataset names known to the catalog, the descriptor shared by
//! both source kinds, and the summaries reported by the CLI.

use crate::config::ParserOptions;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Datasets known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetName {
    HalfhourlyData,
    DailyData,
    AcornDetails,
    InformationsHouseholds,
    Holidays,
    WeatherDaily,
    WeatherHourly,
}

impl DatasetName {
    /// All datasets in catalog order
    pub const ALL: [DatasetName; 7] = [
        DatasetName::HalfhourlyData,
        DatasetName::DailyData,
        DatasetName::AcornDetails,
        DatasetName::InformationsHouseholds,
        DatasetName::Holidays,
        DatasetName::WeatherDaily,
        DatasetName::WeatherHourly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetName::HalfhourlyData => "halfhourly_data",
            DatasetName::DailyData => "daily_data",
            DatasetName::AcornDetails => "acorn_details",
            DatasetName::InformationsHouseholds => "informations_households",
            DatasetName::Holidays => "holidays",
            DatasetName::WeatherDaily => "weather_daily",
            DatasetName::WeatherHourly => "weather_hourly",
        }
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetName {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        DatasetName::ALL
            .into_iter()
            .find(|name| name.as_str() == normalized)
            .ok_or_else(|| CatalogError::UnknownDataset {
                name: s.to_string(),
            })
    }
}

/// Whether a dataset lives in one file or is sharded into block files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    Single,
    Partitioned,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Single => f.write_str("single"),
            SourceKind::Partitioned => f.write_str("partitioned"),
        }
    }
}

/// Where a dataset lives and how its files are parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Path relative to the data root; may hold one block placeholder
    pub path: String,
    /// Column names in file order, replacing the header row
    pub names: Vec<String>,
    /// Columns parsed as timestamps
    pub dates: Vec<String>,
    pub options: ParserOptions,
}

impl SourceDescriptor {
    pub fn new<I, S>(path: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            names: names.into_iter().map(Into::into).collect(),
            dates: Vec::new(),
            options: ParserOptions::default(),
        }
    }

    /// Check that every date column is one of the declared columns
    pub fn validate(&self) -> Result<()> {
        if let Some(missing) = self.dates.iter().find(|date| !self.names.contains(date)) {
            return Err(CatalogError::configuration(format!(
                "date column '{}' is not among the declared columns of {}",
                missing, self.path
            )));
        }
        Ok(())
    }
}

/// Overview of a configured source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub name: DatasetName,
    pub kind: SourceKind,
    pub path: String,
    pub column_count: usize,
    pub date_columns: Vec<String>,
}
