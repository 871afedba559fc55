use anyhow::{Context, Result};
use convert::config::Config;
use std::{path::PathBuf, sync::Arc};
use structopt::StructOpt;

#[derive(Debug, Clone, StructOpt)]
/// Convert label masks to COCO annotations
struct Args {
    #[structopt(long, default_value = "convert.json5")]
    /// configuration file
    pub config_file: PathBuf,
}

#[tokio::main]
pub async fn main() -> Result<()> {
    pretty_env_logger::init();

    // parse arguments
    let Args { config_file } = Args::from_args();
    let config = Arc::new(
        Config::open(&config_file)
            .with_context(|| format!("failed to load config file '{}'", config_file.display()))?,
    );

    // start conversion
    convert::start(config).await?;

    Ok(())
}
