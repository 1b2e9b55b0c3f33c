//! CSV reading through Polars.
//!
//! Reads one file into a `DataFrame` using a source descriptor: the header row
//! is handled per the parser options, the declared column names replace the
//! file's own, and the date columns are parsed into timestamps. Every other
//! column keeps the type Polars infers.

use crate::error::{CatalogError, Result};
use crate::models::SourceDescriptor;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Time unit of parsed date columns
pub const DATE_TIME_UNIT: TimeUnit = TimeUnit::Microseconds;

/// Parse the file at `path` as described by `descriptor`
pub fn read_frame(path: &Path, descriptor: &SourceDescriptor) -> Result<DataFrame> {
    descriptor.validate()?;

    let bytes = std::fs::read(path).map_err(|e| CatalogError::io(path, e))?;
    let bytes = descriptor.options.encoding.decode(bytes);

    let mut df = CsvReadOptions::default()
        .with_has_header(descriptor.options.header.has_header())
        .with_infer_schema_length(descriptor.options.infer_schema_length)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| CatalogError::parse(path, e))?;

    if df.width() != descriptor.names.len() {
        return Err(CatalogError::SchemaMismatch {
            path: path.to_path_buf(),
            expected: descriptor.names.len(),
            found: df.width(),
        });
    }

    df.set_column_names(descriptor.names.iter().map(String::as_str))
        .map_err(|e| CatalogError::parse(path, e))?;

    let df = parse_date_columns(df, descriptor).map_err(|e| CatalogError::parse(path, e))?;

    debug!(
        "Read {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );

    Ok(df)
}

/// Convert the descriptor's date columns into `Datetime` columns
fn parse_date_columns(df: DataFrame, descriptor: &SourceDescriptor) -> PolarsResult<DataFrame> {
    let mut conversions = Vec::with_capacity(descriptor.dates.len());

    for name in &descriptor.dates {
        let column = col(name.as_str());
        let column = match df.column(name)?.dtype() {
            DataType::Datetime(_, _) => continue,
            DataType::Date => {
                conversions.push(column.cast(DataType::Datetime(DATE_TIME_UNIT, None)));
                continue;
            }
            DataType::String => column,
            // Integer-looking dates such as 20121226 and all-null columns
            _ => column.cast(DataType::String),
        };
        conversions.push(column.str().to_datetime(
            Some(DATE_TIME_UNIT),
            None,
            strptime_options(descriptor.options.datetime_format.as_deref()),
            lit("raise"),
        ));
    }

    if conversions.is_empty() {
        return Ok(df);
    }

    df.lazy().with_columns(conversions).collect()
}

fn strptime_options(format: Option<&str>) -> StrptimeOptions {
    StrptimeOptions {
        format: format.map(Into::into),
        strict: true,
        exact: true,
        cache: true,
    }
}
