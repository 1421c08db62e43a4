//! Batch advisor
//!
//! Reads one JSON spot per line, analyses the spots in parallel and writes
//! one JSON result per line, in input order.
//!
//! ```text
//! advise_batch --input spots.jsonl --output results.jsonl
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use holdem_advisor::{AdvisorConfig, Analysis, Analyzer, Spot};

#[derive(Parser)]
#[command(name = "advise_batch")]
#[command(about = "Recommend actions for a JSON-lines file of spots")]
struct Args {
    /// Input file with one spot per line ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// One output line: the analysis, or why the spot could not be analysed.
#[derive(Serialize)]
struct BatchResult {
    line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(flatten)]
    outcome: Outcome,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Outcome {
    Analysis(Analysis),
    Error(String),
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();

    let config = match &args.config {
        Some(path) => AdvisorConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AdvisorConfig::default(),
    };
    let analyzer = Analyzer::from_config(&config).context("building analyzer")?;

    let input = read_input(&args.input)?;
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    log::info!("analysing {} spots with config '{}'", lines.len(), config.name);
    let start = Instant::now();

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(lines.len() as u64)
    };
    pb.set_style(ProgressStyle::with_template(
        "  analysing [{bar:40}] {pos}/{len} [{elapsed} < {eta}, {per_sec}]",
    )?);

    let results: Vec<BatchResult> = lines
        .par_iter()
        .map(|&(line, text)| {
            let result = analyse_line(&analyzer, line, text);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_and_clear();

    let failed = results
        .iter()
        .filter(|r| matches!(r.outcome, Outcome::Error(_)))
        .count();

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    for result in &results {
        serde_json::to_writer(&mut out, result)?;
        writeln!(out)?;
    }
    out.flush()?;

    log::info!(
        "analysed {} spots in {:.2}s ({} failed)",
        results.len(),
        start.elapsed().as_secs_f64(),
        failed
    );
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).context("reading stdin")?;
        return Ok(input);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn analyse_line(analyzer: &Analyzer, line: usize, text: &str) -> BatchResult {
    let spot: Spot = match serde_json::from_str(text) {
        Ok(spot) => spot,
        Err(e) => {
            log::warn!("line {}: invalid spot: {}", line, e);
            return BatchResult { line, id: None, outcome: Outcome::Error(e.to_string()) };
        }
    };

    let outcome = match analyzer.analyze_spot(&spot) {
        Ok(analysis) => Outcome::Analysis(analysis),
        Err(e) => {
            log::warn!("line {}: {}", line, e);
            Outcome::Error(e.to_string())
        }
    };
    BatchResult { line, id: spot.id, outcome }
}
