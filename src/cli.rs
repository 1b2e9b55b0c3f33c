//! Command-line interface for inspecting a dataset directory.

use crate::constants::{DEFAULT_PREVIEW_ROWS, DEFAULT_ROOT_DIR_NAME};
use crate::models::SourceKind;
use crate::source::{DataSource, Source};
use crate::{Catalog, build_catalog};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "smart-meter-catalog")]
#[command(about = "Inspect and load the London smart-meter energy and weather CSV datasets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every dataset in the catalog with its layout and block counts
    List {
        /// Dataset root directory (defaults to <data dir>/smart-meter-data)
        #[arg(value_name = "ROOT")]
        root: Option<String>,
    },
    /// Load a dataset (or one block of a partitioned dataset) and print a preview
    Show {
        /// Dataset name, e.g. halfhourly_data or weather_hourly
        #[arg(value_name = "DATASET")]
        dataset: String,

        /// Dataset root directory (defaults to <data dir>/smart-meter-data)
        #[arg(value_name = "ROOT")]
        root: Option<String>,

        /// Block index for partitioned datasets
        #[arg(short, long, default_value_t = 0)]
        block: usize,

        /// Number of rows to print
        #[arg(short = 'n', long, default_value_t = DEFAULT_PREVIEW_ROWS)]
        rows: usize,
    },
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}

/// Run the parsed command
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    match args.command {
        Commands::List { root } => {
            let catalog = build_catalog(resolve_root(root.as_deref())?);
            list_datasets(&catalog)
        }
        Commands::Show {
            dataset,
            root,
            block,
            rows,
        } => {
            let catalog = build_catalog(resolve_root(root.as_deref())?);
            show_dataset(&catalog, &dataset, block, rows)
        }
    }
}

/// Set up structured logging on stderr
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("smart_meter_catalog={}", args.get_log_level()))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Choose the dataset root: the given path with `~` expanded, or the default
/// directory under the user's data directory
pub fn resolve_root(root: Option<&str>) -> Result<PathBuf> {
    match root {
        Some(root) => expand_home(root),
        None => {
            let data_dir = dirs::data_dir().context("Could not determine user data directory")?;
            Ok(data_dir.join(DEFAULT_ROOT_DIR_NAME))
        }
    }
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &str) -> Result<PathBuf> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return Ok(PathBuf::from(path)),
    };

    let home = dirs::home_dir().context("Could not determine home directory")?;
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

fn list_datasets(catalog: &Catalog) -> Result<()> {
    println!(
        "{} {}",
        "Dataset root:".bright_cyan(),
        catalog.root().display()
    );
    println!();

    for (name, source) in catalog.iter() {
        let summary = source.describe(name);
        println!(
            "  {} {} {}",
            summary.name.to_string().bright_white().bold(),
            format!("[{}]", summary.kind).bright_black(),
            summary.path
        );
        println!(
            "      {} {}",
            "columns:".bright_cyan(),
            summary.column_count
        );
        if !summary.date_columns.is_empty() {
            println!(
                "      {} {}",
                "dates:".bright_cyan(),
                summary.date_columns.join(", ")
            );
        }

        if let Source::Partitioned(partitioned) = source {
            match (partitioned.block_count(), partitioned.matching_block_count()) {
                (Ok(entries), Ok(blocks)) => println!(
                    "      {} {} ({} directory entries)",
                    "blocks:".bright_cyan(),
                    blocks.to_string().bright_white(),
                    entries
                ),
                (Err(e), _) | (_, Err(e)) => println!(
                    "      {} {}",
                    "blocks:".bright_cyan(),
                    e.to_string().bright_red()
                ),
            }
        } else if !source.root().join(&summary.path).is_file() {
            println!("      {}", "file not found".bright_red());
        }
    }

    Ok(())
}

fn show_dataset(catalog: &Catalog, dataset: &str, block: usize, rows: usize) -> Result<()> {
    let source = catalog.get_by_str(dataset)?;

    let df = match source {
        Source::Single(single) => single
            .load()
            .with_context(|| format!("Failed to load {}", dataset))?,
        Source::Partitioned(partitioned) => partitioned
            .load(block)
            .with_context(|| format!("Failed to load block {} of {}", block, dataset))?,
    };

    info!("Loaded {} rows from {}", df.height(), dataset);

    let label = match source.kind() {
        SourceKind::Single => dataset.to_string(),
        SourceKind::Partitioned => format!("{} (block {})", dataset, block),
    };
    println!(
        "{} {} rows x {} columns",
        label.bright_green().bold(),
        df.height().to_string().bright_white(),
        df.width().to_string().bright_white()
    );
    println!("{}", df.head(Some(rows)));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        let home = dirs::home_dir();
        if let Some(home) = home {
            assert_eq!(expand_home("~").unwrap(), home);
            assert_eq!(
                expand_home("~/projects/data").unwrap(),
                home.join("projects/data")
            );
        }
        assert_eq!(expand_home("/data").unwrap(), PathBuf::from("/data"));
        assert_eq!(expand_home("~other/data").unwrap(), PathBuf::from("~other/data"));
    }

    #[test]
    fn test_parse_show_args() {
        let args = Args::parse_from([
            "smart-meter-catalog",
            "show",
            "daily_data",
            "/data",
            "--block",
            "4",
            "-n",
            "3",
        ]);
        match &args.command {
            Commands::Show {
                dataset,
                root,
                block,
                rows,
            } => {
                assert_eq!(dataset, "daily_data");
                assert_eq!(root.as_deref(), Some("/data"));
                assert_eq!(*block, 4);
                assert_eq!(*rows, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.get_log_level(), "info");
    }
}
