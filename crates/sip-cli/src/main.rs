mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::projection::InvestmentArgs;

/// Systematic investment plan projections
#[derive(Parser)]
#[command(
    name = "sip",
    version,
    about = "Systematic investment plan projections",
    long_about = "A CLI for projecting the growth of a recurring fixed-amount \
                  investment with decimal precision. Reports contributed \
                  principal, estimated gains, and maturity value over the full \
                  horizon, plus a year-by-year breakdown."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Full projection: maturity summary plus yearly breakdown
    Project(InvestmentArgs),
    /// Maturity summary for the full (possibly fractional) horizon
    Summary(InvestmentArgs),
    /// Year-by-year breakdown over completed years
    Breakdown(InvestmentArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Project(args) => commands::projection::run_project(args),
        Commands::Summary(args) => commands::projection::run_summary(args),
        Commands::Breakdown(args) => commands::projection::run_breakdown(args),
        Commands::Version => {
            println!("sip {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
