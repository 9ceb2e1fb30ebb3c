//! # Domain Models
//!
//! Value types for Bitfinex market data.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated, normalized trading pair (`ltcbtc`) |
//! | [`Quote`] | Recognized quote currency (`btc`, `eth`, `usd`) |
//! | [`UtcDateTime`] | UTC timestamp |
//!
//! ## Validation
//!
//! [`Symbol`] enforces its invariants at construction time:
//!
//! ```rust
//! use bitfinex_core::{Quote, Symbol, ValidationError};
//!
//! let pair = Symbol::parse("LTC_BTC")?;
//! assert_eq!(pair.as_str(), "ltcbtc");
//! assert_eq!(pair.base(), "ltc");
//! assert_eq!(pair.quote(), Quote::Btc);
//!
//! let invalid = Symbol::parse("ltc btc");
//! assert!(matches!(invalid, Err(ValidationError::SymbolContainsWhitespace { .. })));
//! # Ok::<(), ValidationError>(())
//! ```

mod quote;
mod symbol;
mod timestamp;

pub use quote::Quote;
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
