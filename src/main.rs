//! Command line entry point of the pet editor loader.

use anyhow::Context;
use clap::Parser;
use pet_editor::{action, config, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::init_config()?;

    let app_config = config::APP_CONFIG
        .get()
        .context("failed to get app config")?;
    logger::setup_simple_logger(app_config.is_prod())?;

    let args = action::AppArgs::parse();

    args.run().await
}
