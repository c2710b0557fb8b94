use anyhow::Result;
use blackjack_console::prelude::*;
use blackjack_lib::{BlackjackGameError, BlackjackSession};
use clap::Parser;
use std::io::{self, Write};
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level);
    let config = resolve(&args)?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), format);

    let mut session = match BlackjackSession::start(&config, &mut console) {
        Ok(session) => session,
        Err(BlackjackGameError::InputClosed) => {
            warn!("input closed before the player was seated");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match session.run(&mut console) {
        Ok(()) => {}
        Err(BlackjackGameError::InputClosed) => warn!("input closed, ending the session"),
        Err(e) => return Err(e.into()),
    }

    if args.summary {
        let summary = session.summary();
        let output = console.output_mut();
        match format {
            OutputFormat::Text => write_summary(&summary, output)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *output, &summary)?;
                writeln!(output)?;
            }
        }
    }

    Ok(())
}

/// Diagnostics go to stderr so they never mix with the game on stdout.
fn init_tracing(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
