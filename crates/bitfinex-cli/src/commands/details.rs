use bitfinex_core::MarketClient;
use serde_json::Value;

use crate::error::CliError;

use super::CommandResult;

pub async fn run(client: &MarketClient) -> Result<CommandResult, CliError> {
    let details = client.fetch_symbol_details().await?;
    Ok(CommandResult::ok(Value::Array(details)))
}
