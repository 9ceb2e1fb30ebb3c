//! CLI argument definitions for the Bitfinex client.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `symbols` | List traded symbols |
//! | `details` | List symbol details |
//! | `coins` | Coins traded against a given coin |
//! | `parse` | Validate symbols offline |
//! | `credentials` | Show where API keys resolve from |
//!
//! # Examples
//!
//! ```bash
//! bitfinex coins btc --pretty
//! bitfinex parse LTC_BTC eth-usd
//! bitfinex --define BITFINEX_API_KEY=abc credentials
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use bitfinex_core::config::{DEFAULT_BASE_URL, DEFAULT_RESOURCE_FILE};
use bitfinex_core::http_client::DEFAULT_TIMEOUT_MS;

/// Bitfinex public market data from the command line.
#[derive(Debug, Parser)]
#[command(name = "bitfinex", author, version, about = "Bitfinex public market data client")]
pub struct Cli {
    /// API base URL.
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// TOML resource file holding credentials.
    #[arg(long = "config", global = true, default_value = DEFAULT_RESOURCE_FILE)]
    pub config_file: PathBuf,

    /// Process option KEY=VALUE, may be repeated.
    #[arg(short = 'D', long = "define", global = true, value_name = "KEY=VALUE")]
    pub defines: Vec<String>,

    /// API key; overrides every other source.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Secret key; overrides every other source.
    #[arg(long, global = true)]
    pub secret_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all symbols currently traded.
    Symbols,

    /// List symbol details (precision, order size limits, margin).
    Details,

    /// List coins that trade against COIN.
    ///
    /// # Examples
    ///
    ///   bitfinex coins btc
    ///   bitfinex coins eth --lenient
    Coins(CoinsArgs),

    /// Validate and normalize symbols without contacting the exchange.
    Parse(ParseArgs),

    /// Show which source each credential resolves from.
    Credentials,
}

/// Arguments for the `coins` command.
#[derive(Debug, Args)]
pub struct CoinsArgs {
    /// Coin code, e.g. btc.
    pub coin: String,

    /// Report failures as an empty result instead of an error.
    #[arg(long, default_value_t = false)]
    pub lenient: bool,
}

/// Arguments for the `parse` command.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// One or more raw pair strings.
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,
}
