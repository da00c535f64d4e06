//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "woodshed")]
#[command(about = "A terminal session timer for guitar practice plans")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Practice plan JSON file
    #[arg(short, long, default_value = "practice.json")]
    pub plan: PathBuf,

    /// Validate the plan, print its shape and exit
    #[arg(long)]
    pub check_plan: bool,

    /// Never play alert tones
    #[arg(short, long)]
    pub silent: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
