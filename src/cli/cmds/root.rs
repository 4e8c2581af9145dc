use anyhow::Context;

use crate::base;
use crate::cli;

/// Personal expense tracker
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Add(cli::cmds::add::Add),
    Ls(cli::cmds::ls::Ls),
    Chart(cli::cmds::chart::Chart),
    Clear(cli::cmds::clear::Clear),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let config = fs
            .read_config()
            .with_context(|| format!("failed to read '{}'", fs.config_path().display()))?;
        let store = base::Store::open(fs.store_path())
            .with_context(|| format!("failed to open '{}'", fs.store_path().display()))?;

        // The store handle lives for exactly this invocation; dropping it at
        // the end of the match releases the connection on every exit path.
        match self.command {
            Commands::Add(cmd) => cmd.run(&store),
            Commands::Ls(cmd) => cmd.run(&store, &config),
            Commands::Chart(cmd) => cmd.run(&store, &config),
            Commands::Clear(cmd) => cmd.run(&store),
        }
    }
}
