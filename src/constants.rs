//! Dataset constants for the smart-meter catalog
//!
//! File locations, column layouts and date formats for every dataset the
//! catalog knows about. Column names replace the header row of each file,
//! so their order must follow the file's column order.

// =============================================================================
// Block Path Patterns
// =============================================================================

/// Placeholder substituted with the block index in partitioned path patterns
pub const BLOCK_PLACEHOLDER: &str = "{}";

/// Glob wildcard used in place of the block index when matching block files
pub const BLOCK_WILDCARD: &str = "*";

pub const HALFHOURLY_PATTERN: &str = "halfhourly_dataset/block_{}.csv";
pub const DAILY_PATTERN: &str = "daily_dataset/block_{}.csv";

// =============================================================================
// Single File Paths
// =============================================================================

pub const ACORN_DETAILS_PATH: &str = "acorn_details.csv";
pub const INFORMATIONS_HOUSEHOLDS_PATH: &str = "informations_households.csv";
pub const HOLIDAYS_PATH: &str = "uk_bank_holidays.csv";
pub const WEATHER_DAILY_PATH: &str = "weather_daily_darksky.csv";
pub const WEATHER_HOURLY_PATH: &str = "weather_hourly_darksky.csv";

// =============================================================================
// Column Layouts
// =============================================================================

/// Half-hourly consumption: household id, timestamp, kWh per half hour
pub const HALFHOURLY_COLUMNS: &[&str] = &["lcl_id", "datetime", "energy"];

/// Daily consumption: household id, date and summary statistics of energy
pub const DAILY_COLUMNS: &[&str] = &[
    "lcl_id",
    "day",
    "energy_median",
    "energy_mean",
    "energy_max",
    "energy_count",
    "energy_std",
    "energy_sum",
    "energy_min",
];

/// Leading category columns of the Acorn details file
pub const ACORN_CATEGORY_COLUMNS: &[&str] = &["main_cat", "sub_cat", "reference"];

/// Acorn groups `a` through `q`, one column each
pub const ACORN_GROUPS: std::ops::RangeInclusive<char> = 'a'..='q';

pub const INFORMATIONS_HOUSEHOLDS_COLUMNS: &[&str] =
    &["lcl_id", "tariff_type", "acorn", "acorn_grouped", "block_file"];

pub const HOLIDAYS_COLUMNS: &[&str] = &["date", "holiday_name"];

/// DarkSky daily weather summary fields
pub const WEATHER_DAILY_COLUMNS: &[&str] = &[
    "max_temp",
    "max_temp_datetime",
    "wind_bearing",
    "icon",
    "dew_point",
    "min_temp_datetime",
    "cloud_cover",
    "wind_speed",
    "pressure",
    "apparent_min_temp_time",
    "apparent_high_temp",
    "precip_type",
    "visibility",
    "humidity",
    "apparent_high_temp_time",
    "apparent_low_temp",
    "apparent_max_temp",
    "uv_index",
    "time",
    "sunset_time",
    "low_temp",
    "min_temp",
    "high_temp",
    "sunrise_time",
    "high_temp_time",
    "uv_index_time",
    "summary",
    "low_temp_time",
    "apparent_min_temp",
    "apparent_max_temp_time",
    "apparent_low_temp_time",
    "moon_phase",
];

/// DarkSky hourly weather fields
pub const WEATHER_HOURLY_COLUMNS: &[&str] = &[
    "visibility",
    "wind_bearing",
    "temp",
    "datetime",
    "dew_point",
    "pressure",
    "apparent_temp",
    "wind_speed",
    "precip_type",
    "icon",
    "humidity",
    "summary",
];

// =============================================================================
// Date Formats
// =============================================================================

/// Half-hourly timestamps carry a fractional-second suffix in the raw export
pub const HALFHOURLY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
pub const DAILY_DATE_FORMAT: &str = "%Y-%m-%d";
pub const WEATHER_HOURLY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default root directory name under the user's data directory
pub const DEFAULT_ROOT_DIR_NAME: &str = "smart-meter-data";

/// Rows printed by `show` when no row count is given
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Acorn column names: the category columns followed by `acorn-a` .. `acorn-q`
pub fn acorn_details_columns() -> Vec<String> {
    ACORN_CATEGORY_COLUMNS
        .iter()
        .map(|name| name.to_string())
        .chain(ACORN_GROUPS.map(|group| format!("acorn-{group}")))
        .collect()
}
