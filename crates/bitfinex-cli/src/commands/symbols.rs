use bitfinex_core::MarketClient;

use crate::error::CliError;

use super::CommandResult;

pub async fn run(client: &MarketClient) -> Result<CommandResult, CliError> {
    let snapshot = client.fetch_snapshot().await?;
    Ok(CommandResult::ok(serde_json::to_value(snapshot)?))
}
