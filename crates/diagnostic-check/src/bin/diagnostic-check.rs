use anyhow::Result;
use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use diagnostic_check::config::Config;
use diagnostic_check::inspect;

pub fn main() -> Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only the inspection result
    TermLogger::init(
        config.log_level,
        ConfigBuilder::new().set_time_level(LevelFilter::Off).build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let output = inspect::run(&config)?;
    println!("{}", output);
    Ok(())
}
