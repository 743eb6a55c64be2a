//! Symbol value object for instrument identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Template variable the alerting service emits when it fails to substitute
/// the ticker into an alert message.
pub const TICKER_PLACEHOLDER: &str = "{{TICKER}}";

/// Suffix that marks a crypto pair (e.g. "BTCUSD").
const CRYPTO_QUOTE_SUFFIX: &str = "USD";

/// A trading symbol as received from an alert.
///
/// Examples:
/// - Equity/ETF: "SPY", "AAPL"
/// - Crypto pair: "BTCUSD", "ETHUSD"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is normalized to uppercase. No other cleanup is applied.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Check whether the symbol is empty or the unsubstituted ticker template.
    #[must_use]
    pub fn is_placeholder_or_empty(&self) -> bool {
        self.0.is_empty() || self.0 == TICKER_PLACEHOLDER
    }

    /// Check if this symbol is classified as a crypto pair.
    ///
    /// A symbol is crypto iff it ends with "USD" and is longer than three
    /// characters, so a bare "USD" stays on the equity path. Any 4+ letter
    /// equity ticker ending in "USD" is misclassified by this rule.
    #[must_use]
    pub fn is_crypto(&self) -> bool {
        self.0.ends_with(CRYPTO_QUOTE_SUFFIX) && self.0.chars().count() > CRYPTO_QUOTE_SUFFIX.len()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_new_normalizes_case() {
        let s = Symbol::new("spy");
        assert_eq!(s.as_str(), "SPY");
    }

    #[test]
    fn symbol_display() {
        let s = Symbol::new("MSFT");
        assert_eq!(format!("{s}"), "MSFT");
    }

    #[test]
    fn symbol_is_crypto() {
        assert!(Symbol::new("BTCUSD").is_crypto());
        assert!(Symbol::new("ethusd").is_crypto());
        assert!(Symbol::new("XUSD").is_crypto());
    }

    #[test]
    fn bare_usd_is_not_crypto() {
        let s = Symbol::new("USD");
        assert!(!s.is_crypto());
    }

    #[test]
    fn equity_symbols_are_not_crypto() {
        assert!(!Symbol::new("SPY").is_crypto());
        assert!(!Symbol::new("AAPL").is_crypto());
        assert!(!Symbol::new("USDC").is_crypto());
    }

    #[test]
    fn placeholder_detection() {
        assert!(Symbol::new("").is_placeholder_or_empty());
        assert!(Symbol::new("{{TICKER}}").is_placeholder_or_empty());
        assert!(Symbol::new("{{ticker}}").is_placeholder_or_empty());
        assert!(!Symbol::new("SPY").is_placeholder_or_empty());
        assert!(!Symbol::new(" ").is_placeholder_or_empty());
    }

    #[test]
    fn symbol_serde_transparent() {
        let json = serde_json::to_string(&Symbol::new("qqq")).unwrap();
        assert_eq!(json, "\"QQQ\"");
    }
}
