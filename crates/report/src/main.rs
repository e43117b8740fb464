//! Command-line host for the two-pane diff engine.
//!
//! Loads two files, checks them against the diff limits, prints a chunk
//! summary and optionally writes the full result as JSON for a viewer.

mod report;

use anyhow::Result;
use clap::Parser;
use log::{debug, error, info};
use pane_diff::{
    AlignAlgorithm, DiffConfig, Limits, DEFAULT_MAX_INLINE_COMBINED_LENGTH,
    DEFAULT_MAX_LINE_LENGTH,
};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::report::{check_limits, chunk_summary, load_text, Report};

/// Line alignment algorithm selectable from the command line
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum AlgorithmArg {
    MatchingBlocks,
    Myers,
    Patience,
}

impl From<AlgorithmArg> for AlignAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::MatchingBlocks => AlignAlgorithm::MatchingBlocks,
            AlgorithmArg::Myers => AlignAlgorithm::Myers,
            AlgorithmArg::Patience => AlignAlgorithm::Patience,
        }
    }
}

/// pane-report - compare two text files line by line
#[derive(Parser)]
#[command(name = "pane-report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File shown in the left pane
    left: PathBuf,

    /// File shown in the right pane
    right: PathBuf,

    /// Write chunks and annotated lines as JSON to this path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Reject files with a line longer than this many characters
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    max_line_length: usize,

    /// Skip inline highlighting for line pairs longer than this in total
    #[arg(long, default_value_t = DEFAULT_MAX_INLINE_COMBINED_LENGTH)]
    inline_limit: usize,

    /// Line alignment algorithm
    #[arg(long, value_enum, default_value_t = AlgorithmArg::MatchingBlocks)]
    algorithm: AlgorithmArg,

    /// Ignore very frequent lines and characters as match anchors
    #[arg(long)]
    autojunk: bool,

    /// Number of chunks listed in the summary
    #[arg(long, default_value_t = 20)]
    summary_limit: usize,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = DiffConfig::default()
        .limits(
            Limits::default()
                .max_line_length(cli.max_line_length)
                .max_inline_combined_length(cli.inline_limit),
        )
        .algorithm(cli.algorithm.into())
        .autojunk(cli.autojunk);

    let left = load_text(&cli.left)?;
    let right = load_text(&cli.right)?;

    check_limits(&left, &config.limits)?;
    check_limits(&right, &config.limits)?;

    debug!("Computing diff with {} alignment", config.algorithm);
    let diff = config.diff(&left.text, &right.text)?;
    info!("Found {} change chunks", diff.chunk_count());

    println!("Chunk summary (first {}):", cli.summary_limit);
    print!("{}", chunk_summary(diff.chunks(), cli.summary_limit));

    if let Some(path) = &cli.json {
        let report = Report::new(&diff);
        report.write_json(path)?;
        info!("Generated: {}", path.display());
    }

    Ok(())
}
