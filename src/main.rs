mod cli;
mod config;
mod emr;
mod error;
mod output;
mod record;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .init();

    if !cli.quiet() {
        output::print_banner();
    }

    info!("Starting emraudit - EMR Usage Report Tool");
    cli.execute().await?;

    Ok(())
}
