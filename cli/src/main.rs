//! wheelgen CLI
//!
//! Thin front-end over the core engine: flags in, ticket grid and summary
//! statistics out, optional JSON export.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use wheelgen_core::{generate_wheel, GameShape, GuaranteeLevel, WheelConfig, WheelResult};

#[derive(Parser)]
#[command(name = "wheelgen")]
#[command(version)]
#[command(about = "Generate covering designs (lottery wheels) from a number pool")]
struct Cli {
    /// Pool numbers, comma separated (e.g. 1,5,9,12,23,27,31)
    #[arg(short, long, value_delimiter = ',', required = true)]
    numbers: Vec<u32>,

    /// Numbers per ticket
    #[arg(short, long)]
    game_size: usize,

    /// Highest playable number in the game
    #[arg(short, long)]
    total_numbers: u32,

    /// Generation strategy
    #[arg(short, long, value_enum, default_value = "full")]
    wheel_type: WheelTypeArg,

    /// Guarantee level in m-if-t notation (abbreviated wheels), e.g. 3-if-4
    #[arg(long)]
    guarantee: Option<String>,

    /// Number of tickets to produce (balanced wheels)
    #[arg(long, default_value_t = 50)]
    target_count: usize,

    /// Ticket budget for the greedy optimizer
    #[arg(long, default_value_t = 5000)]
    max_tickets: usize,

    /// RNG seed for reproducible balanced designs
    #[arg(long)]
    seed: Option<u64>,

    /// Write the full result as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WheelTypeArg {
    Full,
    Abbreviated,
    Balanced,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn build_config(cli: &Cli) -> Result<WheelConfig> {
    let config = match cli.wheel_type {
        WheelTypeArg::Full => WheelConfig::full(),
        WheelTypeArg::Abbreviated => {
            let Some(level) = &cli.guarantee else {
                bail!("abbreviated wheels need --guarantee (m-if-t notation, e.g. 3-if-4)");
            };
            WheelConfig::abbreviated(GuaranteeLevel::Preset(level.clone()))
                .with_max_tickets(cli.max_tickets)
        }
        WheelTypeArg::Balanced => WheelConfig::balanced(cli.target_count),
    };

    Ok(match cli.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

fn print_result(result: &WheelResult) {
    println!("Full wheel:  {} tickets", result.full_wheel_count);
    println!(
        "Generated:   {} tickets ({}% savings)",
        result.ticket_count, result.savings_percent
    );
    println!("Guarantee:   {}", result.guarantee);
    println!("Score:       {}", result.score);
    println!();

    for ticket in &result.tickets {
        println!("{}", ticket);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let shape = GameShape {
        game_size: cli.game_size,
        total_numbers: cli.total_numbers,
    };
    let config = build_config(&cli)?;

    let result =
        generate_wheel(&cli.numbers, shape, &config).context("wheel generation failed")?;

    print_result(&result);

    if let Some(path) = &cli.json {
        result
            .to_json_file(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "result exported");
    }

    Ok(())
}
