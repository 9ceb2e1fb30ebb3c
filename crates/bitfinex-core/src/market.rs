use std::collections::BTreeSet;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::{ClientConfig, Credentials};
use crate::error::{ConfigError, CoreError};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{Symbol, UtcDateTime};

pub const SYMBOLS_PATH: &str = "v1/symbols";
pub const SYMBOL_DETAILS_PATH: &str = "v1/symbols_details";

/// Symbol list as returned by the exchange at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketSnapshot {
    pub fetched_at: UtcDateTime,
    pub symbols: Vec<String>,
}

/// Client for the public market-data endpoints.
#[derive(Clone)]
pub struct MarketClient {
    config: ClientConfig,
    http_client: Arc<dyn HttpClient>,
}

impl MarketClient {
    pub fn new(config: ClientConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::new(&config.user_agent));
        Self {
            config,
            http_client,
        }
    }

    pub fn with_http_client(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Credentials for authenticated calls; public queries never need them.
    pub fn credentials(&self) -> Result<&Credentials, CoreError> {
        self.config.credentials.as_ref().ok_or_else(|| {
            CoreError::Configuration(ConfigError::MissingVariable {
                name: crate::config::API_KEY_VAR,
            })
        })
    }

    /// `GET v1/symbols`. Entries that are not strings are dropped.
    pub async fn fetch_symbols(&self) -> Result<Vec<String>, CoreError> {
        let symbols = self
            .fetch_listing()
            .await?
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(raw) => Some(raw),
                other => {
                    tracing::debug!(entry = %other, "dropping non-string listing entry");
                    None
                }
            })
            .collect::<Vec<_>>();
        tracing::info!(count = symbols.len(), "fetched symbol list");
        Ok(symbols)
    }

    /// `GET v1/symbols_details`; entries are passed through untouched.
    pub async fn fetch_symbol_details(&self) -> Result<Vec<Value>, CoreError> {
        self.get_json(SYMBOL_DETAILS_PATH).await
    }

    pub async fn fetch_snapshot(&self) -> Result<MarketSnapshot, CoreError> {
        let symbols = self.fetch_symbols().await?;
        Ok(MarketSnapshot {
            fetched_at: UtcDateTime::now(),
            symbols,
        })
    }

    /// Every coin that trades against `coin`, sorted and deduplicated.
    ///
    /// Symbols failing validation are skipped. Transport, status and body
    /// errors are returned to the caller.
    pub async fn coins_traded_against(&self, coin: &str) -> Result<BTreeSet<String>, CoreError> {
        let listing = self.fetch_listing().await?;
        Ok(coins_paired_with(&listing, coin))
    }

    /// Like [`Self::coins_traded_against`], but any failure is logged and
    /// reported as an empty set.
    pub async fn coins_traded_against_or_empty(&self, coin: &str) -> BTreeSet<String> {
        match self.coins_traded_against(coin).await {
            Ok(coins) => coins,
            Err(error) => {
                tracing::warn!(code = error.code(), %error, coin, "market query failed");
                BTreeSet::new()
            }
        }
    }

    /// Raw `v1/symbols` array; only a non-array body is an error.
    async fn fetch_listing(&self) -> Result<Vec<Value>, CoreError> {
        self.get_json(SYMBOLS_PATH).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        let endpoint = self.config.endpoint(path);
        let request = HttpRequest::get(&endpoint)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms);

        tracing::debug!(%endpoint, "GET");
        let response = self.http_client.execute(request).await?;
        if !response.is_success() {
            return Err(CoreError::UnexpectedStatus {
                status: response.status,
                endpoint,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Opposite legs of every symbol in `listing` that involves `coin`.
///
/// Entries that are not valid symbol strings are skipped. Empty legs are
/// kept: `btc` paired with `btc` yields `""`.
pub fn coins_paired_with(listing: &[Value], coin: &str) -> BTreeSet<String> {
    listing
        .iter()
        .filter_map(|entry| match Symbol::from_json(entry) {
            Ok(symbol) => Some(symbol),
            Err(error) => {
                tracing::debug!(%entry, %error, "skipping symbol");
                None
            }
        })
        .filter(|symbol| symbol.contains(coin))
        .map(|symbol| symbol.opposite_leg(coin).to_owned())
        .collect()
}
