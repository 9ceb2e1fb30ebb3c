//! # Bitfinex Core
//!
//! Symbol model and public market-data client for the Bitfinex REST API.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Client settings and credential resolution |
//! | [`domain`] | Domain values (Symbol, Quote, UtcDateTime) |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`market`] | Market-data client and pair discovery |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bitfinex_core::{ClientConfig, MarketClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MarketClient::new(ClientConfig::default());
//!
//!     // Every coin quoted against or priced in BTC
//!     let coins = client.coins_traded_against("btc").await?;
//!     println!("{coins:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use bitfinex_core::CoreError;
//!
//! fn handle_error(error: CoreError) {
//!     match error {
//!         CoreError::Transport(_) | CoreError::UnexpectedStatus { .. } => {
//!             // Upstream trouble, maybe retry later
//!         }
//!         CoreError::Parse(_) => {
//!             // Response did not have the expected shape
//!         }
//!         _ => {}
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - Credentials are resolved once and injected; they are never logged
//! - All HTTP requests use TLS via rustls

pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod market;

pub use config::{
    ClientConfig, CredentialOrigin, CredentialResolver, Credentials, ResolvedCredentials,
    ResolvedValue,
};
pub use domain::{Quote, Symbol, UtcDateTime};
pub use error::{ConfigError, CoreError, ValidationError};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use market::{coins_paired_with, MarketClient, MarketSnapshot};
