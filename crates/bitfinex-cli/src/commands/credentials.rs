use bitfinex_core::config::{mask, API_KEY_VAR, SECRET_KEY_VAR};
use bitfinex_core::{CredentialOrigin, CredentialResolver, ResolvedValue};
use serde::Serialize;

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct VariableReport {
    name: &'static str,
    resolved: bool,
    origin: Option<CredentialOrigin>,
    value: Option<String>,
}

impl VariableReport {
    fn new(name: &'static str, resolved: Option<&ResolvedValue>, secret: bool) -> Self {
        Self {
            name,
            resolved: resolved.is_some(),
            origin: resolved.map(|value| value.origin),
            value: resolved.map(|value| {
                if secret {
                    String::from("***")
                } else {
                    mask(&value.value)
                }
            }),
        }
    }
}

pub fn run(resolver: &CredentialResolver) -> Result<CommandResult, CliError> {
    let resolved = resolver.resolve()?;
    let report = [
        VariableReport::new(API_KEY_VAR, resolved.api_key.as_ref(), false),
        VariableReport::new(SECRET_KEY_VAR, resolved.secret_key.as_ref(), true),
    ];

    let result = CommandResult::ok(serde_json::to_value(report)?);
    match resolved.require() {
        Ok(_) => Ok(result),
        Err(error) => Ok(result.with_failure(error.into())),
    }
}
