//! Calculate command - long and short term totals for a transaction record

use crate::cmd::read_record;
use crate::core::{GainCalculator, Gains};
use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Log file written in the working directory
pub const LOG_FILE: &str = "capgains.log";

#[derive(Parser, Debug)]
#[command(
    name = "capgains",
    version,
    about = "Calculate long and short term capital gains on vested restricted stock sales"
)]
pub struct CalculateCommand {
    /// JSON file containing the transactions record (or "-" for stdin)
    #[arg(short, long)]
    filename: PathBuf,
}

/// Resolved settings for a run
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub log_file: PathBuf,
}

impl From<CalculateCommand> for Config {
    fn from(cmd: CalculateCommand) -> Self {
        Config {
            input: cmd.filename,
            log_file: PathBuf::from(LOG_FILE),
        }
    }
}

pub fn exec(config: &Config) -> anyhow::Result<()> {
    let gains = calculate(config)?;
    print!("{}", render(&gains));
    Ok(())
}

fn calculate(config: &Config) -> anyhow::Result<Gains> {
    let input = config.input.display();
    let record =
        read_record(&config.input).with_context(|| format!("Failed to read {input}"))?;
    GainCalculator::new(record)
        .calculate()
        .with_context(|| format!("Failed to calculate gains for {input}"))
}

/// Both totals as printed on stdout
fn render(gains: &Gains) -> String {
    format!(
        "Long term:\t{}\nShort term:\t{}\n",
        whole_units(gains.long_term),
        whole_units(gains.short_term)
    )
}

/// Truncate toward zero for display. Totals are kept exact internally.
fn whole_units(amount: Decimal) -> String {
    amount.trunc().normalize().to_string()
}
