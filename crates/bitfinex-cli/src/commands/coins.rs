use std::collections::BTreeSet;

use bitfinex_core::MarketClient;
use serde::Serialize;

use crate::cli::CoinsArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct CoinsResponseData {
    coin: String,
    coins: BTreeSet<String>,
}

pub async fn run(args: &CoinsArgs, client: &MarketClient) -> Result<CommandResult, CliError> {
    let coin = args.coin.trim();
    if coin.is_empty() {
        return Err(CliError::Command(String::from("coin must not be empty")));
    }

    let coins = if args.lenient {
        client.coins_traded_against_or_empty(coin).await
    } else {
        client.coins_traded_against(coin).await?
    };

    let data = serde_json::to_value(CoinsResponseData {
        coin: coin.to_lowercase(),
        coins,
    })?;
    Ok(CommandResult::ok(data))
}
