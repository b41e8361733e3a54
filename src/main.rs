use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::info;
use vacancy_stats::{StatisticsConfig, StatisticsReport, YearRange, find_partition_files};

/// Salary and vacancy statistics by year and region
#[derive(Debug, Parser)]
#[command(name = "vacancy-stats", version, about)]
struct Cli {
    /// Source vacancy file (comma-delimited, with header)
    file: PathBuf,

    /// Profession title to compute the name-filtered statistics for
    name: String,

    /// Directory with one partition file per publication year
    #[arg(long)]
    partitions: Option<PathBuf>,

    /// First publication year to include
    #[arg(long)]
    year_start: Option<i32>,

    /// Last publication year to include
    #[arg(long)]
    year_end: Option<i32>,

    /// Abort on an unknown currency instead of skipping the vacancy
    #[arg(long)]
    strict_currency: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = StatisticsConfig::from_env();
    config.year_range = YearRange::new(
        cli.year_start.unwrap_or(config.year_range.start),
        cli.year_end.unwrap_or(config.year_range.end),
    );
    config.fail_on_unknown_currency = cli.strict_currency;
    config.show_progress = !cli.json;

    let partitions = cli
        .partitions
        .as_deref()
        .map(find_partition_files)
        .transpose()?;

    info!("Building statistics for '{}' from {}", cli.name, cli.file.display());
    let report = StatisticsReport::generate(&cli.file, &cli.name, partitions.as_deref(), &config)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        print!("{}", report.summary());
    }
    Ok(())
}

fn main() -> ExitCode {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
