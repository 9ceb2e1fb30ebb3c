use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::Quote;
use crate::ValidationError;

const SEPARATORS: [char; 2] = ['_', '-'];

/// Normalized Bitfinex trading pair such as `ltcbtc`.
///
/// The stored value is lowercase, carries no `_`/`-` separators and always ends
/// with one of the [`Quote`] codes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol {
    value: String,
    quote: Quote,
}

impl Symbol {
    /// Validate and normalize a raw pair string.
    ///
    /// Checks run in order: non-empty, no whitespace, then the recognized quote
    /// suffix against the lowercased input. Separators are stripped last, so
    /// `ltcbtc_` is rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        if let Some(index) = input.chars().position(char::is_whitespace) {
            return Err(ValidationError::SymbolContainsWhitespace { index });
        }

        let lowered = input.to_lowercase();
        let quote =
            Quote::from_suffix(&lowered).ok_or_else(|| ValidationError::UnrecognizedQuote {
                value: input.to_owned(),
            })?;

        let value = lowered
            .chars()
            .filter(|ch| !SEPARATORS.contains(ch))
            .collect::<String>();

        Ok(Self { value, quote })
    }

    /// Parse one entry of a JSON symbol listing. `null` counts as empty.
    pub fn from_json(entry: &Value) -> Result<Self, ValidationError> {
        match entry {
            Value::String(raw) => Self::parse(raw),
            Value::Null => Err(ValidationError::EmptySymbol),
            other => Err(ValidationError::SymbolNotAString {
                value: other.to_string(),
            }),
        }
    }

    /// Build `base` + `quote` and parse the result.
    pub fn for_base(base: &str, quote: Quote) -> Result<Self, ValidationError> {
        Self::parse(&format!("{}{}", base.to_lowercase(), quote.code()))
    }

    pub fn btc(base: &str) -> Result<Self, ValidationError> {
        Self::for_base(base, Quote::Btc)
    }

    pub fn eth(base: &str) -> Result<Self, ValidationError> {
        Self::for_base(base, Quote::Eth)
    }

    pub fn usd(base: &str) -> Result<Self, ValidationError> {
        Self::for_base(base, Quote::Usd)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub const fn quote(&self) -> Quote {
        self.quote
    }

    /// Everything before the quote code. Empty for a bare code such as `btc`.
    pub fn base(&self) -> &str {
        &self.value[..self.value.len() - self.quote.code().len()]
    }

    /// True when the pair starts or ends with `coin`, ignoring case.
    pub fn contains(&self, coin: &str) -> bool {
        let coin = coin.to_lowercase();
        self.value.starts_with(&coin) || self.value.ends_with(&coin)
    }

    /// The other leg of the pair relative to `coin`.
    ///
    /// A prefix match wins over a suffix match. Returns an empty string when
    /// `coin` is neither; the result is not checked to be a known coin.
    pub fn opposite_leg(&self, coin: &str) -> &str {
        let coin = coin.to_lowercase();
        if let Some(rest) = self.value.strip_prefix(coin.as_str()) {
            return rest;
        }
        if let Some(rest) = self.value.strip_suffix(coin.as_str()) {
            return rest;
        }
        ""
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators_and_lowercases() {
        assert_eq!(Symbol::parse("ltc_btc").expect("valid").as_str(), "ltcbtc");
        assert_eq!(Symbol::parse("LTC-BTC").expect("valid").as_str(), "ltcbtc");
        assert_eq!(Symbol::parse("e-t_h-usd").expect("valid").as_str(), "ethusd");
    }

    #[test]
    fn uppercase_input_is_accepted() {
        let parsed = Symbol::parse("LTCBTC").expect("validation is case-insensitive");
        assert_eq!(parsed.as_str(), "ltcbtc");
        assert_eq!(parsed.quote(), Quote::Btc);
    }

    #[test]
    fn rejects_empty_input() {
        let err = Symbol::parse("").expect_err("must fail");
        assert_eq!(err, ValidationError::EmptySymbol);
    }

    #[test]
    fn rejects_whitespace() {
        let err = Symbol::parse("ltc btc").expect_err("must fail");
        assert_eq!(err, ValidationError::SymbolContainsWhitespace { index: 3 });

        let err = Symbol::parse("ltc\tbtc").expect_err("must fail");
        assert!(matches!(err, ValidationError::SymbolContainsWhitespace { .. }));
    }

    #[test]
    fn rejects_unknown_quote() {
        let err = Symbol::parse("ltcxrp").expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::UnrecognizedQuote {
                value: String::from("ltcxrp")
            }
        );

        let err = Symbol::parse("__").expect_err("separators only");
        assert!(matches!(err, ValidationError::UnrecognizedQuote { .. }));
    }

    #[test]
    fn rejects_trailing_separator() {
        for raw in ["ltcbtc_", "ltc_btc-", "ETHUSD-"] {
            let err = Symbol::parse(raw).expect_err("quote must end the raw input");
            assert_eq!(
                err,
                ValidationError::UnrecognizedQuote {
                    value: raw.to_owned()
                }
            );
        }
    }

    #[test]
    fn json_entries_must_be_strings() {
        let parsed = Symbol::from_json(&Value::from("LTC_BTC")).expect("valid");
        assert_eq!(parsed.as_str(), "ltcbtc");

        assert_eq!(
            Symbol::from_json(&Value::Null),
            Err(ValidationError::EmptySymbol)
        );
        assert!(matches!(
            Symbol::from_json(&Value::from(42)),
            Err(ValidationError::SymbolNotAString { .. })
        ));
    }

    #[test]
    fn decomposes_into_base_and_quote() {
        let parsed = Symbol::parse("iotaeth").expect("valid");
        assert_eq!(parsed.base(), "iota");
        assert_eq!(parsed.quote(), Quote::Eth);

        let bare = Symbol::parse("usd").expect("bare quote code is accepted");
        assert_eq!(bare.base(), "");
    }

    #[test]
    fn quote_constructors_concatenate_and_parse() {
        assert_eq!(Symbol::btc("LTC").expect("valid").as_str(), "ltcbtc");
        assert_eq!(Symbol::eth("omg").expect("valid").as_str(), "omgeth");
        assert_eq!(Symbol::usd("xrp").expect("valid").as_str(), "xrpusd");
        assert!(Symbol::usd("x rp").is_err());
    }

    #[test]
    fn contains_matches_prefix_or_suffix_only() {
        let parsed = Symbol::parse("ltcbtc").expect("valid");
        assert!(parsed.contains("ltc"));
        assert!(parsed.contains("BTC"));
        assert!(parsed.contains("l"));
        assert!(!parsed.contains("cb"));
        assert!(!parsed.contains("eth"));
    }

    #[test]
    fn opposite_leg_returns_other_side() {
        let parsed = Symbol::parse("ltcbtc").expect("valid");
        assert_eq!(parsed.opposite_leg("ltc"), "btc");
        assert_eq!(parsed.opposite_leg("BTC"), "ltc");
        assert_eq!(parsed.opposite_leg("eth"), "");
    }

    #[test]
    fn opposite_leg_prefers_prefix_match() {
        let parsed = Symbol::parse("btcbtc").expect("valid");
        assert_eq!(parsed.opposite_leg("btc"), "btc");

        let parsed = Symbol::parse("usdxusd").expect("valid");
        assert_eq!(parsed.opposite_leg("usd"), "xusd");
    }

    #[test]
    fn serde_round_trips_through_string() {
        let parsed: Symbol = serde_json::from_str("\"ETH_USD\"").expect("valid");
        assert_eq!(parsed.as_str(), "ethusd");
        assert_eq!(
            serde_json::to_string(&parsed).expect("serializes"),
            "\"ethusd\""
        );
        assert!(serde_json::from_str::<Symbol>("\"ethxrp\"").is_err());
    }
}
