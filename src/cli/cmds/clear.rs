use anyhow::Context;

use crate::base;
use crate::cli;

/// Delete all expenses
#[derive(clap::Parser)]
pub struct Clear {}

impl Clear {
    pub fn run(&self, store: &base::Store) -> anyhow::Result<cli::Output> {
        print!("Are you sure you want to delete ALL expenses? This cannot be undone. [y/N]: ");
        std::io::Write::flush(&mut std::io::stdout()).context("failed to write prompt")?;

        // EOF leaves the answer empty, which lands on the safe no-op path.
        let mut answer = String::new();
        std::io::stdin()
            .read_line(&mut answer)
            .context("failed to read confirmation")?;
        self.run_with_answer(store, &answer)
    }

    fn run_with_answer(&self, store: &base::Store, answer: &str) -> anyhow::Result<cli::Output> {
        if !confirmed(answer) {
            return Ok(cli::Output::Str("Operation cancelled."));
        }

        store.delete_all().context("failed to delete expenses")?;
        // The deletion above is already durable; a failed sequence reset only
        // means numbering continues from where it left off.
        if let Err(e) = store.reset_sequence() {
            eprintln!("warning: could not reset the id sequence: {}", e);
        }
        Ok(cli::Output::Str("All expenses have been deleted."))
    }
}

fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
