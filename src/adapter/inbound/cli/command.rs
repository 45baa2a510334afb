//! Command-line interface definitions.
//!
//! Defines the `clap` structure for the apostas CLI: listing and
//! inspecting bets, placing new ones, config management, and a
//! connectivity check.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::paths;

/// Bet listing and tracking CLI for the aposta service
#[derive(Parser, Debug)]
#[command(name = "apostas")]
#[command(version)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Bearer token (overrides APOSTAS_TOKEN and the config file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the apostas CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the authenticated user's bets
    List(ListArgs),

    /// Show a single bet (settles it server-side when the match is over)
    Show(ShowArgs),

    /// Place a new bet
    Place(PlaceArgs),

    /// Show the current session state
    Session,

    /// Check connectivity to the aposta service
    Check,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `apostas list`.
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only bets with this status (server-side filter), e.g. GANHOU
    #[arg(long)]
    pub status: Option<String>,

    /// Refresh every N seconds until interrupted
    #[arg(long, value_name = "SECONDS")]
    pub watch: Option<u64>,
}

/// Arguments for `apostas show`.
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Bet identifier
    pub id: String,
}

/// Arguments for `apostas place`.
#[derive(clap::Args, Debug)]
pub struct PlaceArgs {
    /// Match identifier to bet on
    #[arg(long)]
    pub partida: i64,

    /// Predicted outcome
    #[arg(long, value_enum)]
    pub resultado: ResultadoArg,

    /// Amount to wager
    #[arg(long)]
    pub valor: Decimal,
}

/// The three outcomes the service understands.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ResultadoArg {
    /// Home side wins
    VitoriaMandante,
    /// Visiting side wins
    VitoriaVisitante,
    /// Draw
    Empate,
}

impl From<ResultadoArg> for crate::domain::BetResult {
    fn from(arg: ResultadoArg) -> Self {
        match arg {
            ResultadoArg::VitoriaMandante => Self::VitoriaMandante,
            ResultadoArg::VitoriaVisitante => Self::VitoriaVisitante,
            ResultadoArg::Empate => Self::Empate,
        }
    }
}

/// Subcommands for `apostas config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied
    Show,
    /// Validate a configuration file for correctness
    Validate,
}

/// Arguments for `apostas config init`.
#[derive(clap::Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
