//! Single-spot advisor
//!
//! Prints a recommendation for one decision point.
//!
//! ```text
//! advise --hand AhKs --board "Qd Jc 2s" --position BTN --pot 10 --to-call 2 --stack 100
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use holdem_advisor::{
    AdvisorConfig, Analysis, Analyzer, Board, EconomicState, HoleCards, OpponentProfile, Position,
};

#[derive(Parser)]
#[command(name = "advise")]
#[command(about = "Recommend fold, call or raise for a hold'em spot")]
struct Args {
    /// Hero hole cards, e.g. AhKs
    #[arg(long)]
    hand: HoleCards,

    /// Community cards, e.g. "Qd Jc 2s" (omit preflop)
    #[arg(long)]
    board: Option<Board>,

    /// Hero seat: UTG, MP, CO, BTN, SB, BB
    #[arg(long)]
    position: Position,

    /// Chips already in the pot
    #[arg(long)]
    pot: f64,

    /// Chips needed to call
    #[arg(long, default_value_t = 0.0)]
    to_call: f64,

    /// Hero stack
    #[arg(long)]
    stack: f64,

    /// Opponent style: tight, loose (anything else is neutral)
    #[arg(long, default_value = "neutral")]
    style: String,

    /// Opponent aggression: passive, aggressive (anything else is neutral)
    #[arg(long, default_value = "neutral")]
    aggression: String,

    /// Opponent hole cards, when known
    #[arg(long)]
    villain: Option<HoleCards>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => AdvisorConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AdvisorConfig::default(),
    };
    let analyzer = Analyzer::from_config(&config).context("building analyzer")?;

    let profile = OpponentProfile::parse_lenient(&args.style, &args.aggression);
    let economics = EconomicState::new(args.pot, args.to_call, args.stack);
    let board = args.board.clone().unwrap_or_default();

    log::info!(
        "{} {} on [{}], pot {} to call {} stack {}, vs {}",
        args.position,
        args.hand,
        board,
        args.pot,
        args.to_call,
        args.stack,
        profile
    );

    let analysis = analyzer
        .analyze_detailed(
            &args.hand,
            &board,
            args.position,
            &economics,
            &profile,
            args.villain.as_ref(),
        )
        .context("analysis failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&analysis);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn print_analysis(analysis: &Analysis) {
    println!("=== {} ===\n", analysis.recommendation);
    println!("{}\n", analysis.recommendation.reason);
    println!("Hand:          {} (strength {:.1})", analysis.hand, analysis.hand_strength);
    println!("Street:        {}", analysis.street);
    println!("Pot odds:      {:.1}%", analysis.pot_odds);
    println!("Fold equity:   {:.0}%", analysis.fold_equity);
    if let Some(equity) = analysis.equity {
        println!("Equity:        {:.1}%", equity);
    }
}
