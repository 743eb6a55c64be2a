//! Order type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order type specifying execution behavior.
///
/// The bridge only ever submits market orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Market order - execute at best available price.
    #[default]
    Market,
}

impl OrderType {
    /// Wire name of the order type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "market",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => write!(f, "MARKET"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_type_default_is_market() {
        assert_eq!(OrderType::default(), OrderType::Market);
        assert_eq!(OrderType::Market.as_str(), "market");
    }
}
