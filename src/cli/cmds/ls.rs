use anyhow::Context;

use crate::base;
use crate::cli;

/// List all expenses
#[derive(clap::Parser)]
pub struct Ls {}

impl Ls {
    pub fn run(&self, store: &base::Store, config: &base::Config) -> anyhow::Result<cli::Output> {
        let scan = store.select_all().context("failed to query expenses")?;
        for e in &scan.skipped {
            eprintln!("warning: skipping unreadable row: {}", e);
        }

        let breakdown = base::Breakdown::from_expenses(&scan.expenses);
        Ok(cli::Output::Table(base::table::Config {
            charset: cli::util::charset_from_config(config),
            today: base::date::today(),
            line_width: config.line_width,
            expenses: scan.expenses,
            breakdown,
        }))
    }
}
