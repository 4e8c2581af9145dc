use anyhow::Context;

use crate::base;
use crate::cli;

/// Add an expense
#[derive(clap::Parser)]
pub struct Add {
    /// Title of the expense
    #[arg(short, long)]
    title: String,

    /// Amount of the expense
    #[arg(short, long)]
    amount: base::Amount,

    /// Day of the month (1-28) the expense falls on
    ///
    /// Capped at 28 so an entry is valid in every month.
    #[arg(short, long)]
    day: base::Day,

    /// Optional category of the expense
    #[arg(short, long)]
    category: Option<String>,
}

impl Add {
    pub fn run(&self, store: &base::Store) -> anyhow::Result<cli::Output> {
        if self.title.trim().is_empty() {
            anyhow::bail!("title must not be empty");
        }

        store
            .insert(&self.title, self.amount, self.day, self.category.as_deref())
            .context("failed to insert expense")?;
        Ok(cli::Output::String(format!(
            "Expense added successfully for day {}!",
            self.day.get()
        )))
    }
}
