mod analyzer;
mod error;
mod loader;
mod models;

use analyzer::IntakeAnalyzer;
use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use models::{Config, Query, DEFAULT_DATASET_PATH};
use std::path::Path;

fn main() -> Result<()> {
    let matches = Command::new("intake-analyzer")
        .version("1.0")
        .about("Computes intakes per doctor for a given quarter and week")
        .arg(
            Arg::new("quarter")
                .value_name("QUARTER")
                .help("Quarter label as it appears in the dataset, e.g. 2018-1")
                .required(true),
        )
        .arg(
            Arg::new("week")
                .value_name("WEEK")
                .help("Week number within the quarter")
                .required(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("doctors")
                .value_name("DOCTORS")
                .help("Number of doctors on duty that week")
                .required(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .value_name("FILE")
                .help("Dataset file path (overrides the configured path)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print progress details to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config_file = matches.get_one::<String>("config").unwrap();
    let config = if Path::new(config_file).exists() {
        Config::load_from_file(config_file)
            .with_context(|| format!("failed to load configuration from {}", config_file))?
    } else {
        Config::default()
    };

    let dataset_path = matches
        .get_one::<String>("data")
        .cloned()
        .or(config.dataset_path)
        .unwrap_or_else(|| DEFAULT_DATASET_PATH.to_string());

    let query = Query {
        quarter: matches.get_one::<String>("quarter").unwrap().clone(),
        week: *matches.get_one::<i64>("week").unwrap(),
        num_doctors: *matches.get_one::<i64>("doctors").unwrap(),
    };

    let verbose = matches.get_flag("verbose");
    if verbose {
        eprintln!("📂 Reading dataset from: {}", dataset_path);
    }

    let records = loader::load_records(Path::new(&dataset_path))?;

    if verbose {
        eprintln!("✅ Loaded {} intake records", records.len());
        eprintln!(
            "🔍 Looking up quarter {} week {} for {} doctors",
            query.quarter, query.week, query.num_doctors
        );
    }

    let analyzer = IntakeAnalyzer::new(&query);
    let rate = analyzer.intakes_per_doctor(&records)?;

    println!("{}", rate);
    Ok(())
}
