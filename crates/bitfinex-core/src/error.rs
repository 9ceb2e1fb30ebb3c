use thiserror::Error;

use crate::http_client::HttpError;

/// Validation errors raised while building domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty. Example: ltcbtc")]
    EmptySymbol,
    #[error("symbol cannot contain whitespace (found at index {index}). Example: ltcbtc")]
    SymbolContainsWhitespace { index: usize },
    #[error("symbol listing entry must be a string, got {value}")]
    SymbolNotAString { value: String },
    #[error("market symbol should end with btc, eth or usd. Example: ltcbtc. Provided: {value}")]
    UnrecognizedQuote { value: String },

    #[error("invalid quote code '{value}', expected one of btc, eth, usd")]
    UnknownQuoteCode { value: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
}

/// Errors raised while resolving client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing {name}. Please check environment variables or options")]
    MissingVariable { name: &'static str },

    #[error("cannot load resource file '{path}': {message}")]
    ResourceFile { path: String, message: String },

    #[error("invalid option '{value}', expected KEY=VALUE")]
    InvalidDefine { value: String },
}

/// Top-level error type for client operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("upstream returned status {status} for {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

impl CoreError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "core.validation",
            Self::Transport(_) => "core.transport",
            Self::UnexpectedStatus { .. } => "core.unexpected_status",
            Self::Parse(_) => "core.parse",
            Self::Configuration(_) => "core.configuration",
        }
    }

    /// Whether repeating the same request could succeed.
    pub fn retryable(&self) -> bool {
        match self {
            Self::Transport(error) => error.retryable(),
            Self::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
