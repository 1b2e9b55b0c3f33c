//! Integration tests loading catalog sources from a temporary dataset root
//!
//! Each test writes a handful of small CSV files laid out like the real
//! dataset directory and loads them through a catalog.

use chrono::NaiveDate;
use polars::prelude::*;
use smart_meter_catalog::{
    CatalogError, DataRoot, DataSource, DatasetName, SingleFileSource, build_catalog,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HOLIDAYS_CSV: &str = "Bank holidays,Type\n2012-12-26,Boxing Day\n2012-12-25,Christmas Day\n";

const HOUSEHOLDS_CSV: &str = "LCLid,stdorToU,Acorn,Acorn_grouped,file\n\
MAC005492,ToU,ACORN-,ACORN-,block_0\n\
MAC001074,ToU,ACORN-,ACORN-,block_0\n";

const WEATHER_HOURLY_CSV: &str = "visibility,windBearing,temperature,time,dewPoint,pressure,apparentTemperature,windSpeed,precipType,icon,humidity,summary\n\
5.97,104,10.24,2011-11-11 00:00:00,8.86,1016.76,10.24,2.77,rain,partly-cloudy-night,0.91,Partly Cloudy\n";

fn write_file(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn first_timestamp_micros(df: &DataFrame, column: &str) -> Option<i64> {
    let series = df.column(column).unwrap().as_materialized_series().clone();
    series.cast(&DataType::Int64).unwrap().i64().unwrap().get(0)
}

fn micros(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> i64 {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
        .and_utc()
        .timestamp_micros()
}

#[test]
fn test_single_file_columns_follow_declared_order() {
    let root = TempDir::new().unwrap();
    write_file(root.path(), "informations_households.csv", HOUSEHOLDS_CSV.as_bytes());

    let catalog = build_catalog(root.path());
    let df = catalog.informations_households().load().unwrap();

    assert_eq!(
        column_names(&df),
        catalog.informations_households().column_names()
    );
    assert_eq!(df.height(), 2);
}

#[test]
fn test_halfhourly_block_parses_datetime() {
    let root = TempDir::new().unwrap();
    write_file(
        root.path(),
        "halfhourly_dataset/block_0.csv",
        b"LCLid,tstp,energy(kWh/hh)\n1,2023-01-01 00:00:00,0.5\n",
    );

    let catalog = build_catalog(root.path());
    let df = catalog.halfhourly_data().load(0).unwrap();

    assert_eq!(df.height(), 1);
    assert!(matches!(
        df.column("datetime").unwrap().dtype(),
        DataType::Datetime(_, _)
    ));
    assert_eq!(
        first_timestamp_micros(&df, "datetime"),
        Some(micros(2023, 1, 1, 0, 0))
    );
    assert_eq!(df.column("energy").unwrap().dtype(), &DataType::Float64);
}

#[test]
fn test_halfhourly_fractional_seconds() {
    let root = TempDir::new().unwrap();
    write_file(
        root.path(),
        "halfhourly_dataset/block_7.csv",
        b"LCLid,tstp,energy(kWh/hh)\nMAC000002,2012-10-12 00:30:00.0000000,0\n",
    );

    let catalog = build_catalog(root.path());
    let df = catalog.halfhourly_data().load(7).unwrap();

    assert_eq!(
        first_timestamp_micros(&df, "datetime"),
        Some(micros(2012, 10, 12, 0, 30))
    );
}

fn halfhourly_rows(count: usize) -> String {
    let mut contents = String::from("LCLid,tstp,energy(kWh/hh)\n");
    for i in 0..count {
        contents.push_str(&format!(
            "MAC000002,2012-10-12 {:02}:{:02}:00.0000000,",
            i / 60,
            i % 60
        ));
        contents.push_str(if i % 2 == 0 { "0\n" } else { "0.1\n" });
    }
    contents
}

#[test]
fn test_halfhourly_late_float_reading() {
    let root = TempDir::new().unwrap();
    let mut contents = String::from("LCLid,tstp,energy(kWh/hh)\n");
    for i in 0..150 {
        contents.push_str(&format!(
            "MAC000002,2012-10-12 {:02}:{:02}:00.0000000,0\n",
            i / 60,
            i % 60
        ));
    }
    contents.push_str("MAC000002,2012-10-12 02:30:00.0000000,0.263\n");
    write_file(root.path(), "halfhourly_dataset/block_0.csv", contents.as_bytes());

    let catalog = build_catalog(root.path());
    let df = catalog.halfhourly_data().load(0).unwrap();

    assert_eq!(df.height(), 151);
    let energy = df.column("energy").unwrap().as_materialized_series().clone();
    assert_eq!(energy.dtype(), &DataType::Float64);
    assert_eq!(energy.f64().unwrap().get(150), Some(0.263));
}

#[test]
fn test_halfhourly_late_null_token_keeps_text() {
    let root = TempDir::new().unwrap();
    let mut contents = halfhourly_rows(150);
    contents.push_str("MAC000002,2012-10-12 02:30:00.0000000,Null\n");
    write_file(root.path(), "halfhourly_dataset/block_1.csv", contents.as_bytes());

    let catalog = build_catalog(root.path());
    let df = catalog.halfhourly_data().load(1).unwrap();

    assert_eq!(df.height(), 151);
    let energy = df.column("energy").unwrap().as_materialized_series().clone();
    assert_eq!(energy.dtype(), &DataType::String);
    assert_eq!(energy.str().unwrap().get(150), Some("Null"));
}

#[test]
fn test_daily_block_parses_day() {
    let root = TempDir::new().unwrap();
    write_file(
        root.path(),
        "daily_dataset/block_0.csv",
        b"LCLid,day,energy_median,energy_mean,energy_max,energy_count,energy_std,energy_sum,energy_min\n\
MAC000131,2011-12-15,0.485,0.4320454545454545,0.868,22,0.2391457593294577,9.505,0.072\n",
    );

    let catalog = build_catalog(root.path());
    let df = catalog.daily_data().load(0).unwrap();

    assert_eq!(column_names(&df), catalog.daily_data().column_names());
    assert_eq!(
        first_timestamp_micros(&df, "day"),
        Some(micros(2011, 12, 15, 0, 0))
    );
    assert_eq!(df.column("energy_count").unwrap().dtype(), &DataType::Int64);
}

#[test]
fn test_weather_hourly_parses_datetime() {
    let root = TempDir::new().unwrap();
    write_file(root.path(), "weather_hourly_darksky.csv", WEATHER_HOURLY_CSV.as_bytes());

    let catalog = build_catalog(root.path());
    let df = catalog.weather_hourly().load().unwrap();

    assert_eq!(df.width(), 12);
    assert_eq!(
        first_timestamp_micros(&df, "datetime"),
        Some(micros(2011, 11, 11, 0, 0))
    );
}

#[test]
fn test_acorn_details_decodes_latin1() {
    let root = TempDir::new().unwrap();
    let mut contents = b"MAIN CATEGORIES,CATEGORIES,REFERENCE".to_vec();
    for group in 'A'..='Q' {
        contents.extend_from_slice(format!(",ACORN-{group}").as_bytes());
    }
    contents.extend_from_slice(b"\nPOPULATION,Age,Age 0-4 \xA3 caf\xE9");
    for value in 0..17 {
        contents.extend_from_slice(format!(",{}", 70 + value).as_bytes());
    }
    contents.push(b'\n');
    write_file(root.path(), "acorn_details.csv", &contents);

    let catalog = build_catalog(root.path());
    let df = catalog.acorn_details().load().unwrap();

    assert_eq!(df.width(), 20);
    let reference = df.column("reference").unwrap().as_materialized_series().clone();
    assert_eq!(reference.str().unwrap().get(0), Some("Age 0-4 £ café"));
    assert_eq!(df.column("acorn-q").unwrap().dtype(), &DataType::Int64);
}

#[test]
fn test_block_count_counts_every_entry() {
    let root = TempDir::new().unwrap();
    for block in 0..3 {
        write_file(
            root.path(),
            &format!("halfhourly_dataset/block_{block}.csv"),
            b"LCLid,tstp,energy(kWh/hh)\n",
        );
    }

    let catalog = build_catalog(root.path());
    let source = catalog.halfhourly_data();
    assert_eq!(source.block_count().unwrap(), 3);

    write_file(root.path(), "halfhourly_dataset/notes.txt", b"unrelated");
    assert_eq!(source.block_count().unwrap(), 4);
    assert_eq!(source.matching_block_count().unwrap(), 3);
}

#[test]
fn test_missing_block_is_io_error() {
    let root = TempDir::new().unwrap();
    write_file(
        root.path(),
        "daily_dataset/block_0.csv",
        b"LCLid,day,energy_median,energy_mean,energy_max,energy_count,energy_std,energy_sum,energy_min\n",
    );

    let catalog = build_catalog(root.path());
    let err = catalog.daily_data().load(1).unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn test_unset_root_fails_with_not_found() {
    let source = SingleFileSource::new(
        DataRoot::default(),
        "no_such_dir_for_catalog_tests/uk_bank_holidays.csv",
        ["date", "holiday_name"],
    );

    let err = source.load().unwrap_err();

    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.is_not_found());
}

#[test]
fn test_catalogs_keep_their_own_roots() {
    let first_root = TempDir::new().unwrap();
    let second_root = TempDir::new().unwrap();
    write_file(first_root.path(), "uk_bank_holidays.csv", HOLIDAYS_CSV.as_bytes());
    write_file(
        second_root.path(),
        "uk_bank_holidays.csv",
        b"Bank holidays,Type\n2013-01-01,New Year's Day\n",
    );

    let first = build_catalog(first_root.path());
    let second = build_catalog(second_root.path());

    let first_df = first.holidays().load().unwrap();
    let second_df = second.holidays().load().unwrap();

    assert_eq!(first_df.height(), 2);
    assert_eq!(second_df.height(), 1);
    assert_eq!(first.root(), first_root.path());
}

#[test]
fn test_wrong_column_layout_is_schema_mismatch() {
    let root = TempDir::new().unwrap();
    write_file(
        root.path(),
        "uk_bank_holidays.csv",
        b"Bank holidays,Type,Region\n2012-12-26,Boxing Day,UK\n",
    );

    let catalog = build_catalog(root.path());
    let err = catalog.holidays().load().unwrap_err();

    assert!(matches!(
        err,
        CatalogError::SchemaMismatch {
            expected: 2,
            found: 3,
            ..
        }
    ));
    assert!(!err.is_io());
}

#[test]
fn test_every_catalog_entry_reports_its_layout() {
    let catalog = build_catalog("/data");
    let summaries = catalog.summaries();

    assert_eq!(summaries.len(), DatasetName::ALL.len());
    for (summary, name) in summaries.iter().zip(DatasetName::ALL) {
        assert_eq!(summary.name, name);
        let source = catalog.get(name);
        assert_eq!(summary.column_count, source.column_names().len());
    }
}
