mod coins;
mod credentials;
mod details;
mod parse;
mod symbols;

use bitfinex_core::config::{API_KEY_VAR, SECRET_KEY_VAR};
use bitfinex_core::{ClientConfig, CredentialResolver, MarketClient};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Data to print, plus an error that should still set the exit code.
pub struct CommandResult {
    pub data: Value,
    pub failure: Option<CliError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            failure: None,
        }
    }

    pub fn with_failure(mut self, failure: CliError) -> Self {
        self.failure = Some(failure);
        self
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let resolver = credential_resolver(cli)?;

    match &cli.command {
        Command::Symbols => symbols::run(&market_client(cli, &resolver)).await,
        Command::Details => details::run(&market_client(cli, &resolver)).await,
        Command::Coins(args) => coins::run(args, &market_client(cli, &resolver)).await,
        Command::Parse(args) => parse::run(args),
        Command::Credentials => credentials::run(&resolver),
    }
}

fn credential_resolver(cli: &Cli) -> Result<CredentialResolver, CliError> {
    let mut resolver = CredentialResolver::from_process_env()
        .with_explicit(API_KEY_VAR, cli.api_key.clone())
        .with_explicit(SECRET_KEY_VAR, cli.secret_key.clone())
        .with_resource_file(&cli.config_file);

    for define in &cli.defines {
        resolver = resolver.with_define(define)?;
    }

    Ok(resolver)
}

fn market_client(cli: &Cli, resolver: &CredentialResolver) -> MarketClient {
    // Public endpoints work without keys, so a broken resource file only warns here.
    let credentials = match resolver.resolve() {
        Ok(resolved) => resolved.into_credentials(),
        Err(error) => {
            tracing::warn!(%error, "continuing without credentials");
            None
        }
    };

    let config = ClientConfig::default()
        .with_base_url(cli.base_url.as_str())
        .with_timeout_ms(cli.timeout_ms)
        .with_credentials(credentials);

    MarketClient::new(config)
}
