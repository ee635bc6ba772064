use std::{path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use column_index::{
    ensure_found, find, load_column, to_lines, Report, SearchKind, DEFAULT_COLUMN, DEFAULT_FILE,
};
use log::{error, info};
use rmi::prelude::*;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(help = "Value to look up in the column.", allow_negative_numbers = true)]
    key: f64,

    #[arg(long, help = "CSV file to index.", default_value = DEFAULT_FILE)]
    file: PathBuf,

    #[arg(long, help = "Name of the numeric column to index.", default_value = DEFAULT_COLUMN)]
    column: String,

    #[arg(long, help = "Report every matching line instead of the first one found.")]
    all: bool,

    #[arg(long, value_enum, help = "Search used within the error window.", default_value_t)]
    search: SearchKind,

    #[arg(long, help = "Print the index statistics and the matches as JSON.")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    log_init::init();

    let cli = Cli::parse();

    let start = Instant::now();
    let values = load_column(&cli.file, &cli.column)?;
    let index: LearnedIndex = LearnedIndex::build(&values)
        .with_context(|| format!("failed to index column `{}`", cli.column))?;

    info!(
        "indexed {} values of `{}` in {}",
        index.len(),
        cli.column,
        humantime::format_duration(start.elapsed())
    );
    let (min_residual, max_residual) = index.residual_range();
    info!(
        "max error is {}; residuals range from {} to {}",
        index.max_error(),
        min_residual,
        max_residual
    );

    let start = Instant::now();
    let offsets = find(&index, cli.key, cli.search, cli.all);
    info!(
        "{} search for {} took {}",
        cli.search.as_ref(),
        cli.key,
        humantime::format_duration(start.elapsed())
    );

    let lines = match ensure_found(offsets, &cli.file, cli.key) {
        Ok(offsets) => to_lines(&offsets),
        Err(err) => {
            error!("{:#}", err);
            return Err(err);
        }
    };

    if cli.json {
        let report = Report {
            file: cli.file.display().to_string(),
            column: cli.column.clone(),
            key: cli.key,
            search: cli.search,
            index: index.summary(),
            lines,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        info!("we found {} entries in the index", lines.len());
        println!(
            "rows where {} is {} are located at lines {:?} inside {}",
            cli.column,
            cli.key,
            lines,
            cli.file.display()
        );
    }

    Ok(())
}
