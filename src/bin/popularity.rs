//! Batch popularity recommendations from a TSV interaction file.
//!
//! Reads `user<TAB>item` lines, ranks items by distinct-user count, and
//! writes `user<TAB>item<TAB>score` lines for every user in the input.
//!
//! Run with: cargo run --bin popularity -- --input ratings.tsv --max-length 10
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `info`).

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use topnkit::rec::{PopularityRecommender, PreferenceData, RunnerBuilder, TsvFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Interaction file (`user<TAB>item` per line); `-` reads stdin
    #[arg(short, long, default_value = "-")]
    input: PathBuf,

    /// Output file; `-` writes stdout
    #[arg(short, long, default_value = "-")]
    output: PathBuf,

    /// Items per user; 0 keeps every candidate
    #[arg(short = 'n', long, default_value_t = 10)]
    max_length: usize,

    /// Also recommend items the user already interacted with
    #[arg(long)]
    include_seen: bool,

    /// Fixed number of decimals for scores
    #[arg(long)]
    precision: Option<usize>,
}

fn open_input(path: &PathBuf) -> anyhow::Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(io::stdin().lock())));
    }
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_output(path: &PathBuf) -> anyhow::Result<Box<dyn Write>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let data: PreferenceData<String, String> = PreferenceData::read_tsv(open_input(&cli.input)?)
        .with_context(|| format!("failed to read interactions from {}", cli.input.display()))?;
    tracing::info!(
        users = data.num_users(),
        items = data.num_items(),
        interactions = data.num_interactions(),
        "interactions loaded"
    );

    let recommender = PopularityRecommender::new(&data);
    let format = match cli.precision {
        Some(digits) => TsvFormat::with_precision(digits),
        None => TsvFormat::new(),
    };

    let include_seen = cli.include_seen;
    let runner = RunnerBuilder::new().max_length(cli.max_length).build(
        data.users().iter().cloned(),
        format,
        |user: &String| -> Vec<String> {
            data.items()
                .iter()
                .filter(|item| include_seen || !data.has_interacted(user, item))
                .cloned()
                .collect()
        },
    );

    let summary = runner
        .run(&recommender, open_output(&cli.output)?)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    tracing::info!(users = summary.users, rows = summary.rows, "done");
    Ok(())
}
