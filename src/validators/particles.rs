//! Occurrence indicators
//!
//! Every entry of a content model carries an occurrence bound. Feed
//! schemas only ever use the four classic indicators, written in the
//! schema table with the DTD-style symbols `""`, `"?"`, `"+"` and `"*"`.

use std::fmt;

use serde::Serialize;

/// Occurrence bounds for a content model entry (min, max).
/// None for max means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Occurs {
    /// Minimum number of occurrences
    pub min: u32,
    /// Maximum number of occurrences (None = unbounded)
    pub max: Option<u32>,
}

impl Occurs {
    /// Exactly one (1, 1)
    pub const fn once() -> Self {
        Self { min: 1, max: Some(1) }
    }

    /// Zero or one (0, 1)
    pub const fn optional() -> Self {
        Self { min: 0, max: Some(1) }
    }

    /// Zero or more (0, unbounded)
    pub const fn zero_or_more() -> Self {
        Self { min: 0, max: None }
    }

    /// One or more (1, unbounded)
    pub const fn one_or_more() -> Self {
        Self { min: 1, max: None }
    }

    /// Parse an occurrence symbol: `""` (exactly one), `"?"`, `"+"` or `"*"`
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "" => Some(Self::once()),
            "?" => Some(Self::optional()),
            "+" => Some(Self::one_or_more()),
            "*" => Some(Self::zero_or_more()),
            _ => None,
        }
    }

    /// The symbol this bound is written with
    pub fn symbol(&self) -> &'static str {
        match (self.min, self.max) {
            (0, Some(1)) => "?",
            (1, None) => "+",
            (0, None) => "*",
            _ => "",
        }
    }

    /// Check if the entry allows at most one occurrence
    pub fn is_single(&self) -> bool {
        self.max == Some(1)
    }

    /// Check if occurrence count is under the minimum
    pub fn is_missing(&self, count: u32) -> bool {
        count < self.min
    }

    /// Check if occurrence count exceeds the maximum
    pub fn is_exceeded(&self, count: u32) -> bool {
        match self.max {
            Some(max) => count > max,
            None => false,
        }
    }
}

impl Default for Occurs {
    fn default() -> Self {
        Self::once()
    }
}

impl fmt::Display for Occurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}..{}", self.min, max),
            None => write!(f, "{}..*", self.min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Occurs::from_symbol(""), Some(Occurs::once()));
        assert_eq!(Occurs::from_symbol("?"), Some(Occurs::optional()));
        assert_eq!(Occurs::from_symbol("+"), Some(Occurs::one_or_more()));
        assert_eq!(Occurs::from_symbol("*"), Some(Occurs::zero_or_more()));
        assert_eq!(Occurs::from_symbol("{2}"), None);

        for symbol in ["", "?", "+", "*"] {
            let occurs = Occurs::from_symbol(symbol).unwrap();
            assert_eq!(occurs.symbol(), symbol);
        }
    }

    #[test]
    fn test_bounds() {
        let once = Occurs::once();
        assert!(once.is_missing(0));
        assert!(!once.is_missing(1));
        assert!(once.is_exceeded(2));
        assert!(once.is_single());

        let many = Occurs::zero_or_more();
        assert!(!many.is_missing(0));
        assert!(!many.is_exceeded(1000));
    }

    #[test]
    fn test_display() {
        assert_eq!(Occurs::once().to_string(), "1..1");
        assert_eq!(Occurs::one_or_more().to_string(), "1..*");
    }
}
