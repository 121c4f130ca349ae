use clap::Parser;

use crate::cmd::calculate::{self, CalculateCommand, Config};

mod cmd;
mod core;
mod logging;

fn main() -> anyhow::Result<()> {
    let config = Config::from(CalculateCommand::parse());
    logging::init(&config.log_file);
    calculate::exec(&config)
}
