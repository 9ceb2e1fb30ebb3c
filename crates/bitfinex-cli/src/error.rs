use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] bitfinex_core::ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Configuration(#[from] bitfinex_core::ConfigError),

    #[error(transparent)]
    Upstream(bitfinex_core::CoreError),

    #[error("{invalid} of {total} symbols failed validation")]
    InvalidSymbols { invalid: usize, total: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl From<bitfinex_core::CoreError> for CliError {
    fn from(error: bitfinex_core::CoreError) -> Self {
        match error {
            bitfinex_core::CoreError::Validation(error) => Self::Validation(error),
            bitfinex_core::CoreError::Configuration(error) => Self::Configuration(error),
            other => Self::Upstream(other),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::InvalidSymbols { .. } => 2,
            Self::Configuration(_) => 3,
            Self::Serialization(_) => 4,
            Self::Upstream(_) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitfinex_core::{ConfigError, CoreError, HttpError};

    #[test]
    fn core_errors_map_to_distinct_exit_codes() {
        let transport: CliError = CoreError::Transport(HttpError::new("down")).into();
        assert_eq!(transport.exit_code(), 5);

        let config: CliError = CoreError::Configuration(ConfigError::MissingVariable {
            name: "BITFINEX_API_KEY",
        })
        .into();
        assert_eq!(config.exit_code(), 3);
    }
}
