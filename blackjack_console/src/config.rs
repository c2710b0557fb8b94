//! Command line arguments and the optional JSON config file.

use anyhow::{Context, Result};
use blackjack_lib::{TableConfig, TableConfigBuilder};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// Play blackjack against the dealer in your terminal.
#[derive(Debug, Parser)]
#[command(name = "blackjack", version, about)]
pub struct Args {
    /// JSON file with table settings; flags given on the command line win.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Starting bank for both you and the dealer.
    #[arg(long)]
    pub bank: Option<i64>,
    /// Stake each side puts in the pot every round.
    #[arg(long)]
    pub ante: Option<i64>,
    /// Seed for reproducible shuffles.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Your name; skips the name prompt.
    #[arg(long)]
    pub name: Option<String>,
    /// Emit events and prompts as JSON lines instead of text.
    #[arg(long)]
    pub json: bool,
    /// Print a summary of the session when it ends.
    #[arg(long)]
    pub summary: bool,
    /// Log level for diagnostics written to stderr.
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

/// A struct for table settings deserialized from JSON. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub starting_bank: Option<i64>,
    pub ante: Option<i64>,
    pub seed: Option<u64>,
    pub player_name: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<FileConfig> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    fn apply(self, builder: &mut TableConfigBuilder) {
        if let Some(bank) = self.starting_bank {
            builder.starting_bank(bank);
        }
        if let Some(ante) = self.ante {
            builder.ante(ante);
        }
        if let Some(seed) = self.seed {
            builder.seed(seed);
        }
        if let Some(name) = self.player_name {
            builder.player_name(name);
        }
    }
}

/// Builds the table configuration: defaults, then the config file, then command line flags.
pub fn resolve(args: &Args) -> Result<TableConfig> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let mut builder = TableConfig::new();
    file.apply(&mut builder);
    FileConfig {
        starting_bank: args.bank,
        ante: args.ante,
        seed: args.seed,
        player_name: args.name.clone(),
    }
    .apply(&mut builder);

    let config = builder.build();
    config.validate()?;
    Ok(config)
}
