use anyhow::Context;

use crate::base;
use crate::cli;

/// Chart category totals
#[derive(clap::Parser)]
pub struct Chart {}

impl Chart {
    pub fn run(&self, store: &base::Store, config: &base::Config) -> anyhow::Result<cli::Output> {
        let scan = store.select_all().context("failed to query expenses")?;
        for e in &scan.skipped {
            eprintln!("warning: skipping unreadable row: {}", e);
        }

        Ok(cli::Output::Chart(base::chart::Config {
            charset: cli::util::charset_from_config(config),
            bar_width: config.bar_width,
            breakdown: base::Breakdown::from_expenses(&scan.expenses),
        }))
    }
}
