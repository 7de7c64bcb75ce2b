//! Command-line interface for the `pairwise-align` crate.
//!
//! Subcommands are implemented in `src/bin/pairalign/align_cmd.rs`:
//! - `global` (alias: `needle`): Needleman–Wunsch
//! - `local` (alias: `water`): Smith–Waterman
//!
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name="pairalign", version=env!("CARGO_PKG_VERSION"), about="Global and local pairwise sequence alignment", disable_help_subcommand=true)]
struct Cli {
    /// Log verbosity (1=error, 2=warning, 3=info, 4=debug, 5+=trace). `RUST_LOG` overrides.
    #[arg(long, global=true, default_value_t=3)]
    verbosity: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Needleman–Wunsch global alignment. Alias: `needle`.
    #[command(visible_alias = "needle")]
    Global(align_cmd::GlobalCmd),
    /// Smith–Waterman local alignment. Alias: `water`.
    #[command(visible_alias = "water")]
    Local(align_cmd::LocalCmd),
}

#[path = "pairalign/align_cmd.rs"] mod align_cmd;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbosity {
        v if v <= 1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    match cli.command {
        Command::Global(cmd) => {
            let (policy, args) = cmd.into_parts();
            align_cmd::run(policy, args)
        }
        Command::Local(cmd) => {
            let (policy, args) = cmd.into_parts();
            align_cmd::run(policy, args)
        }
    }
}
