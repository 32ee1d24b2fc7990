//! [`Args`] definitions.

use std::path::PathBuf;

use clap::Parser;

/// Real-estate dashboard core, driven by gestures and emitting view updates.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Path to the JSON lines file of gestures.
    ///
    /// Standard input is read if omitted.
    #[arg(short, long)]
    pub gestures: Option<PathBuf>,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}
