//! Command-line arguments for the `appointment-scheduler` binary.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE};

#[derive(Debug, Parser)]
#[command(name = "appointment-scheduler")]
#[command(about = "Show the appointment calendar for the current month and the selected day")]
pub struct Cli {
    /// YAML config file. A missing file means defaults.
    #[arg(env = CONFIG_PATH_ENV, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}
