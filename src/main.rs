use anyhow::Context;
use clap::Parser;

use habitdeck::args::Cli;
use habitdeck::config::Config;
use habitdeck::logging::init_tracing;
use habitdeck::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;

    let mut config = config.apply_env().with_api_url(cli.api_url);
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }
    config.validate().context("invalid configuration")?;

    let log_path = init_tracing(&config.logging).context("failed to open log file")?;
    tracing::info!(
        base_url = %config.api.base_url,
        log_file = %log_path.display(),
        "starting habitdeck"
    );

    runtime::run(config)
}
