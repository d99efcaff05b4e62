//! Bot CLI
//!
//! Runs single decision ticks against snapshot files and checks formation
//! tables. Commands go to stdout as JSON; logs go to stderr.

use anyhow::{Context, Result};
use bot_core::{BotConfig, Dispatcher, FormationTable, Side, Snapshot, TacticalBot};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "bot_cli")]
#[command(about = "Run bot decision ticks from snapshot files", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide one tick and print the commands
    Decide {
        /// Snapshot JSON file
        #[arg(long)]
        snapshot: PathBuf,

        /// Shirt number of the deciding agent
        #[arg(long)]
        number: u32,

        /// home | away
        #[arg(long)]
        side: Side,

        /// disputing | defending | holding | supporting | goalkeeping[-STATE]
        #[arg(long)]
        mode: String,

        /// Overrides the configured RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Bot configuration JSON (defaults to BOT_POLICY_PROFILE preset)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Formation table JSON (defaults to the built-in table)
        #[arg(long)]
        formation: Option<PathBuf>,
    },

    /// Validate a formation table and print it
    Formation {
        /// Formation table JSON (defaults to the built-in table)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Send the pre-kickoff notification
    Ready {
        /// Snapshot JSON file
        #[arg(long)]
        snapshot: PathBuf,

        #[arg(long)]
        number: u32,

        #[arg(long)]
        side: Side,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Decide {
            snapshot,
            number,
            side,
            mode,
            seed,
            config,
            formation,
        } => {
            let snap = load_snapshot(&snapshot)?;
            let mut config = load_config(config.as_deref())?;
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let table = Arc::new(load_formation(formation.as_deref())?);
            let bot = TacticalBot::new(number, side, config, table)?;

            let mut dispatcher = Dispatcher::new(bot);
            let commands = dispatcher
                .dispatch_raw(&mode, &snap)
                .context("formation table defect")?;
            info!(turn = snap.turn, number, %side, count = commands.len(), "decided");
            println!("{}", serde_json::to_string_pretty(&commands)?);
        }

        Commands::Formation { file } => {
            let table = load_formation(file.as_deref())?;
            let config = BotConfig::from_env_or_default();
            table.validate_grid(config.grid.cols, config.grid.rows)?;
            println!("{}", serde_json::to_string_pretty(&table.entries())?);
        }

        Commands::Ready {
            snapshot,
            number,
            side,
        } => {
            let snap = load_snapshot(&snapshot)?;
            let table = Arc::new(FormationTable::standard()?);
            let bot = TacticalBot::new(number, side, BotConfig::from_env_or_default(), table)?;
            Dispatcher::new(bot).prepare(&snap);
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing snapshot {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<BotConfig> {
    match path {
        Some(path) => BotConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(BotConfig::from_env_or_default()),
    }
}

fn load_formation(path: Option<&Path>) -> Result<FormationTable> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading formation {}", path.display()))?;
            FormationTable::from_json_str(&raw)
                .with_context(|| format!("parsing formation {}", path.display()))
        }
        None => Ok(FormationTable::standard()?),
    }
}
