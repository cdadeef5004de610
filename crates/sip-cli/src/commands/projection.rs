use clap::Args;
use serde_json::Value;

use sip_core::projection::{self, InvestmentInput};

use crate::input;

/// Investment parameters, shared by every subcommand. The value flags are
/// raw text so the core owns parsing and validation.
#[derive(Args)]
pub struct InvestmentArgs {
    /// Monthly contribution amount (e.g. 1000)
    #[arg(long, allow_hyphen_values = true)]
    pub monthly: Option<String>,

    /// Expected annual return percentage (e.g. 12 for 12%)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Investment horizon in years (may be fractional)
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<String>,

    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

/// Resolve an `InvestmentInput` from flags, a JSON file, or piped stdin.
fn resolve_input(args: &InvestmentArgs) -> Result<InvestmentInput, Box<dyn std::error::Error>> {
    if args.monthly.is_some() || args.rate.is_some() || args.years.is_some() {
        let parsed = InvestmentInput::parse(
            args.monthly.as_deref().unwrap_or(""),
            args.rate.as_deref().unwrap_or(""),
            args.years.as_deref().unwrap_or(""),
        )?;
        return Ok(parsed);
    }

    let parsed: InvestmentInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err(
            "--monthly/--rate/--years, --input <file.json>, or piped JSON on stdin required"
                .into(),
        );
    };
    parsed.validate()?;
    Ok(parsed)
}

pub fn run_project(args: InvestmentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inv = resolve_input(&args)?;
    let result = projection::project(&inv)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_summary(args: InvestmentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inv = resolve_input(&args)?;
    let result = projection::compute_summary(&inv)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_breakdown(args: InvestmentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inv = resolve_input(&args)?;
    let result = projection::compute_yearly_breakdown(&inv)?;
    Ok(serde_json::to_value(result)?)
}
