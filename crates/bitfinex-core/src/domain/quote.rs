use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Quote currencies a Bitfinex pair may be denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quote {
    Btc,
    Eth,
    Usd,
}

impl Quote {
    pub const ALL: [Self; 3] = [Self::Btc, Self::Eth, Self::Usd];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Btc => "btc",
            Self::Eth => "eth",
            Self::Usd => "usd",
        }
    }

    /// Quote whose code terminates `value`, compared case-sensitively.
    pub fn from_suffix(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|quote| value.ends_with(quote.code()))
    }
}

impl Display for Quote {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Quote {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|quote| quote.code() == normalized)
            .ok_or_else(|| ValidationError::UnknownQuoteCode {
                value: value.to_owned(),
            })
    }
}
