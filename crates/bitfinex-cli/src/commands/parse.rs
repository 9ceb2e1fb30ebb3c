use bitfinex_core::{Quote, Symbol};
use serde::Serialize;

use crate::cli::ParseArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ParseOutcome {
    Valid {
        input: String,
        symbol: Symbol,
        base: String,
        quote: Quote,
    },
    Invalid {
        input: String,
        error: String,
    },
}

fn parse_one(input: &str) -> ParseOutcome {
    match Symbol::parse(input) {
        Ok(symbol) => ParseOutcome::Valid {
            input: input.to_owned(),
            base: symbol.base().to_owned(),
            quote: symbol.quote(),
            symbol,
        },
        Err(error) => ParseOutcome::Invalid {
            input: input.to_owned(),
            error: error.to_string(),
        },
    }
}

pub fn run(args: &ParseArgs) -> Result<CommandResult, CliError> {
    let outcomes = args
        .symbols
        .iter()
        .map(|input| parse_one(input))
        .collect::<Vec<_>>();
    let invalid = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, ParseOutcome::Invalid { .. }))
        .count();

    let result = CommandResult::ok(serde_json::to_value(&outcomes)?);
    if invalid > 0 {
        return Ok(result.with_failure(CliError::InvalidSymbols {
            invalid,
            total: outcomes.len(),
        }));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_symbol_reports_base_and_quote() {
        let args = ParseArgs {
            symbols: vec![String::from("LTC_BTC")],
        };
        let result = run(&args).expect("parse never errors outright");

        assert!(result.failure.is_none());
        assert_eq!(result.data[0]["symbol"], "ltcbtc");
        assert_eq!(result.data[0]["base"], "ltc");
        assert_eq!(result.data[0]["quote"], "btc");
    }

    #[test]
    fn invalid_symbols_set_a_failure_but_keep_output() {
        let args = ParseArgs {
            symbols: vec![String::from("ethusd"), String::from("eth eur")],
        };
        let result = run(&args).expect("parse never errors outright");

        assert!(matches!(
            result.failure,
            Some(CliError::InvalidSymbols {
                invalid: 1,
                total: 2
            })
        ));
        assert_eq!(result.data[1]["input"], "eth eur");
        assert!(result.data[1]["error"]
            .as_str()
            .is_some_and(|message| message.contains("whitespace")));
    }
}
