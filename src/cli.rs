use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use log::{debug, LevelFilter};

use crate::config::Config;
use crate::emr::{fetch_cluster_records, EmrClient};
use crate::output::{print_report, FetchProgress};
use crate::report::UsageReport;

#[derive(Debug, Parser)]
#[command(name = "emraudit")]
#[command(author, version, about = "Print a report on EMR usage over the past two months", long_about = None)]
pub struct Cli {
    /// Print more messages to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Don't print anything to stderr; the report still goes to stdout
    #[arg(short, long)]
    quiet: bool,

    /// Path to an alternate config file to read from
    #[arg(short = 'c', long, env = "EMRAUDIT_CONF", value_name = "PATH")]
    conf_path: Option<PathBuf>,

    /// Don't load a config file even if one is available
    #[arg(long)]
    no_conf: bool,
}

impl Cli {
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Log level implied by the flags. `--quiet` silences logging entirely,
    /// even when `--verbose` is also given.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Runs the audit pipeline: load config, connect, fetch the cluster
    /// list, aggregate, print the report.
    pub async fn execute(&self) -> Result<()> {
        let config = if self.no_conf {
            Config::default()
        } else {
            Config::load(self.conf_path.as_deref())?
        };
        debug!("AWS overrides from config: {:?}", config.aws);

        let client = EmrClient::connect(&config.aws).await;

        // Wall clock for the report's "Current time" line, sampled
        // before the fetch.
        let now = Utc::now();

        let progress = FetchProgress::start(self.quiet);
        let records = fetch_cluster_records(&client).await?;
        progress.finish(records.len());

        let report = UsageReport::from_records(records, now);
        print_report(report.as_ref());

        Ok(())
    }
}
