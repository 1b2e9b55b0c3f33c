//! The fixed catalog of smart-meter datasets.
//!
//! `build_catalog` binds one data root into a source for every known dataset.
//! Each catalog owns its root, so building a second catalog for another
//! directory never changes where the first one reads from.

use crate::config::{DataRoot, ParserOptions, TextEncoding};
use crate::constants::*;
use crate::error::Result;
use crate::models::{DatasetName, DatasetSummary};
use crate::source::{PartitionedFileSource, SingleFileSource, Source};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Sources for every dataset under one data root
#[derive(Debug, Clone)]
pub struct Catalog {
    root: DataRoot,
    halfhourly_data: PartitionedFileSource,
    daily_data: PartitionedFileSource,
    acorn_details: SingleFileSource,
    informations_households: SingleFileSource,
    holidays: SingleFileSource,
    weather_daily: SingleFileSource,
    weather_hourly: SingleFileSource,
}

/// Build the catalog for the dataset family stored under `root`.
///
/// No files are touched; a leading `~` is not expanded.
pub fn build_catalog(root: impl Into<PathBuf>) -> Catalog {
    let root = DataRoot::new(root);
    debug!("Building dataset catalog rooted at {}", root.path().display());

    let halfhourly_data = PartitionedFileSource::new(
        root.clone(),
        HALFHOURLY_PATTERN,
        HALFHOURLY_COLUMNS.iter().copied(),
    )
    .with_dates(["datetime"])
    .with_options(ParserOptions::default().with_datetime_format(HALFHOURLY_DATETIME_FORMAT));

    let daily_data =
        PartitionedFileSource::new(root.clone(), DAILY_PATTERN, DAILY_COLUMNS.iter().copied())
            .with_dates(["day"])
            .with_options(ParserOptions::default().with_datetime_format(DAILY_DATE_FORMAT));

    let acorn_details =
        SingleFileSource::new(root.clone(), ACORN_DETAILS_PATH, acorn_details_columns())
            .with_options(ParserOptions::default().with_encoding(TextEncoding::Latin1));

    let informations_households = SingleFileSource::new(
        root.clone(),
        INFORMATIONS_HOUSEHOLDS_PATH,
        INFORMATIONS_HOUSEHOLDS_COLUMNS.iter().copied(),
    );

    let holidays =
        SingleFileSource::new(root.clone(), HOLIDAYS_PATH, HOLIDAYS_COLUMNS.iter().copied());

    let weather_daily = SingleFileSource::new(
        root.clone(),
        WEATHER_DAILY_PATH,
        WEATHER_DAILY_COLUMNS.iter().copied(),
    );

    let weather_hourly = SingleFileSource::new(
        root.clone(),
        WEATHER_HOURLY_PATH,
        WEATHER_HOURLY_COLUMNS.iter().copied(),
    )
    .with_dates(["datetime"])
    .with_options(ParserOptions::default().with_datetime_format(WEATHER_HOURLY_DATETIME_FORMAT));

    Catalog {
        root,
        halfhourly_data,
        daily_data,
        acorn_details,
        informations_households,
        holidays,
        weather_daily,
        weather_hourly,
    }
}

impl Catalog {
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn get(&self, name: DatasetName) -> Source<'_> {
        match name {
            DatasetName::HalfhourlyData => Source::Partitioned(&self.halfhourly_data),
            DatasetName::DailyData => Source::Partitioned(&self.daily_data),
            DatasetName::AcornDetails => Source::Single(&self.acorn_details),
            DatasetName::InformationsHouseholds => Source::Single(&self.informations_households),
            DatasetName::Holidays => Source::Single(&self.holidays),
            DatasetName::WeatherDaily => Source::Single(&self.weather_daily),
            DatasetName::WeatherHourly => Source::Single(&self.weather_hourly),
        }
    }

    /// Look up a dataset by its string name, e.g. `"weather_hourly"`
    pub fn get_by_str(&self, name: &str) -> Result<Source<'_>> {
        let dataset: DatasetName = name.parse()?;
        Ok(self.get(dataset))
    }

    /// Sources in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (DatasetName, Source<'_>)> {
        DatasetName::ALL.into_iter().map(|name| (name, self.get(name)))
    }

    pub fn len(&self) -> usize {
        DatasetName::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summaries(&self) -> Vec<DatasetSummary> {
        self.iter().map(|(name, source)| source.describe(name)).collect()
    }

    /// Half-hourly consumption per household (kWh per half hour)
    pub fn halfhourly_data(&self) -> &PartitionedFileSource {
        &self.halfhourly_data
    }

    /// Daily consumption statistics per household
    pub fn daily_data(&self) -> &PartitionedFileSource {
        &self.daily_data
    }

    pub fn acorn_details(&self) -> &SingleFileSource {
        &self.acorn_details
    }

    pub fn informations_households(&self) -> &SingleFileSource {
        &self.informations_households
    }

    pub fn holidays(&self) -> &SingleFileSource {
        &self.holidays
    }

    pub fn weather_daily(&self) -> &SingleFileSource {
        &self.weather_daily
    }

    pub fn weather_hourly(&self) -> &SingleFileSource {
        &self.weather_hourly
    }
}
