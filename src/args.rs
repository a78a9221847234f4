use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default, PartialEq)]
#[command(name = "habitdeck", version)]
#[command(about = "Terminal client for a habit-tracking service")]
pub struct Cli {
    /// Base URL of the habit service (overrides HABITDECK_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the configured file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
