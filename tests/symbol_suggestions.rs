use quickcheck_macros::quickcheck;
use stock_graph_viewer::domain::market_data::{KNOWN_SYMBOLS, Symbol, suggest};
use stock_graph_viewer::domain::state::ChartViewState;

#[test]
fn offers_ten_symbols() {
    assert_eq!(KNOWN_SYMBOLS.len(), 10);
    assert!(KNOWN_SYMBOLS.contains(&"AAPL"));
    assert!(KNOWN_SYMBOLS.contains(&"NFLX"));
}

#[test]
fn blank_input_is_not_a_symbol() {
    assert_eq!(Symbol::parse("   "), None);
    assert_eq!(Symbol::parse("\t\n"), None);
    assert_eq!(Symbol::parse("  aapl ").map(|s| s.value().to_string()), Some("aapl".to_string()));
}

#[test]
fn typing_aa_filters_case_insensitively() {
    let state = ChartViewState::new().set_symbol("aa");
    let suggestions = state.suggestions();
    assert!(suggestions.contains(&"AAPL"));
    assert!(!suggestions.contains(&"MSFT"));
    assert_eq!(suggestions, vec!["AAPL"]);
}

#[test]
fn mixed_case_input_matches() {
    assert_eq!(suggest("Fl"), vec!["NFLX"]);
    assert_eq!(suggest("a"), vec!["AAPL", "AMZN", "TSLA", "NVDA", "META", "AMD"]);
    assert!(suggest("xyz").is_empty());
}

#[test]
fn selecting_suggestion_replaces_input() {
    let state = ChartViewState::new().set_symbol("nv").select_suggestion("NVDA");
    assert_eq!(state.selection.symbol, "NVDA");
}

#[quickcheck]
fn suggestions_are_exactly_the_matching_known_symbols(input: String) -> bool {
    let needle = input.to_lowercase();
    let suggested = suggest(&input);
    KNOWN_SYMBOLS
        .iter()
        .all(|symbol| suggested.contains(symbol) == symbol.to_lowercase().contains(&needle))
}
