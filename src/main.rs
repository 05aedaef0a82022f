use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use bankdesk::app::{App, Command};
use bankdesk::config::Config;
use bankdesk::logging::init_tracing;
use bankdesk::shell::run_shell;

#[derive(Debug, Parser)]
#[command(name = "bankdesk", version, about = "Personal banking demo over an in-memory store")]
struct Cli {
    /// Config file (default: ~/.config/bankdesk/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: TopCommand,
}

#[derive(Debug, Subcommand)]
enum TopCommand {
    /// Interactive session; store changes live until the session ends
    Shell,
    #[command(flatten)]
    Run(Command),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let mut app = App::new(&config).context("Failed to start")?;

    match cli.command {
        TopCommand::Shell => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_shell(&mut app, stdin.lock(), &mut stdout).await?;
        }
        TopCommand::Run(command) => {
            let mut stdout = io::stdout().lock();
            for line in app.execute(command).await {
                writeln!(stdout, "{}", line)?;
            }
        }
    }

    Ok(())
}
