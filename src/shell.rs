//! Interactive session over a single store.
//!
//! Reads one command per line, runs it against the [`App`] and prints the
//! result. Store changes are announced after the command output.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use parking_lot::Mutex;

use crate::app::{change_summary, App, Command};

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
    #[command(flatten)]
    Run(Command),
}

/// What a single input line asked for.
#[derive(Debug, PartialEq)]
pub enum LineOutcome {
    Run(Command),
    Quit,
    Empty,
    /// Unparseable input; the message is clap's rendered help or error.
    Invalid(String),
}

/// Parse one shell line. Quoting follows POSIX shell rules.
pub fn parse_line(line: &str) -> LineOutcome {
    let Some(words) = shlex::split(line) else {
        return LineOutcome::Invalid("Unbalanced quotes".to_string());
    };
    if words.is_empty() {
        return LineOutcome::Empty;
    }

    match ShellLine::try_parse_from(words) {
        Ok(ShellLine {
            command: ShellCommand::Quit,
        }) => LineOutcome::Quit,
        Ok(ShellLine {
            command: ShellCommand::Run(command),
        }) => LineOutcome::Run(command),
        Err(e) => LineOutcome::Invalid(e.render().to_string()),
    }
}

/// Run the shell until `quit` or end of input.
pub async fn run_shell<R, W>(app: &mut App, input: R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let pending = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&pending);
    let _subscription = app.store().subscribe(move |snapshot| {
        sink.lock().push(change_summary(snapshot));
    });

    write!(output, "> ")?;
    output.flush()?;
    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            LineOutcome::Quit => break,
            LineOutcome::Empty => {}
            LineOutcome::Invalid(message) => writeln!(output, "{}", message.trim_end())?,
            LineOutcome::Run(command) => {
                tracing::debug!(?command, "Shell command");
                for line in app.execute(command).await {
                    writeln!(output, "{}", line)?;
                }
                for note in pending.lock().drain(..) {
                    writeln!(output, "{}", note)?;
                }
            }
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}
