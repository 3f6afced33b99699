use derive_more::{Deref, Display};

/// Tickers offered as suggestions under the symbol input.
pub const KNOWN_SYMBOLS: [&str; 10] = [
    "AAPL", "MSFT", "GOOG", "AMZN", "TSLA", "SPY", "NVDA", "META", "NFLX", "AMD",
];

/// Known tickers containing `input`, case-insensitively, in their fixed order.
pub fn suggest(input: &str) -> Vec<&'static str> {
    let needle = input.to_lowercase();
    KNOWN_SYMBOLS
        .iter()
        .copied()
        .filter(|symbol| symbol.to_lowercase().contains(&needle))
        .collect()
}

/// Value Object - the ticker a request is issued for.
///
/// Always trimmed and never empty. Case is kept exactly as typed: the
/// backends look tickers up verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display)]
#[display(fmt = "{}", _0)]
pub struct Symbol(String);

impl Symbol {
    /// `None` when the input is blank after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn parse_trims_but_keeps_case() {
        assert_eq!(Symbol::parse("  aapl ").unwrap().value(), "aapl");
        assert!(Symbol::parse(" \t\n").is_none());
        assert!(Symbol::parse("").is_none());
    }

    #[quickcheck]
    fn parsed_symbol_is_trimmed_and_non_empty(raw: String) -> bool {
        match Symbol::parse(&raw) {
            Some(symbol) => !symbol.is_empty() && symbol.value() == raw.trim(),
            None => raw.trim().is_empty(),
        }
    }

    #[test]
    fn empty_input_suggests_everything() {
        assert_eq!(suggest(""), KNOWN_SYMBOLS.to_vec());
    }

    #[test]
    fn suggestion_keeps_fixed_order() {
        assert_eq!(suggest("m"), vec!["MSFT", "AMZN", "META", "AMD"]);
    }
}
