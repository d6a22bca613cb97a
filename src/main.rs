use anyhow::{Context, Result};
use clap::Parser;

use escape_time::{CliController, Config, PpmFilePresenter};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let params = config
        .to_render_params()
        .context("invalid render parameters")?;

    let mut controller = CliController::new(PpmFilePresenter::new());

    controller
        .generate(&params, config.serial)
        .context("render failed")?;
    controller
        .write(&config.output)
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    Ok(())
}
