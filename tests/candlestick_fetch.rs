mod common;

use common::{MockSource, submit_and_settle};
use serde_json::json;
use stock_graph_viewer::application::ChartViewService;
use stock_graph_viewer::domain::chart::{Backend, ChartType, PlotPayload, StyledTrace};
use stock_graph_viewer::domain::state::ChartViewState;

fn service() -> ChartViewService<MockSource> {
    ChartViewService::new(MockSource::new().respond(
        Backend::Candlestick,
        json!({"data": [{"dates": ["2024-01-01"], "open": [1], "high": [2], "low": [0.5], "close": [1.5]}]}),
    ))
}

#[test]
fn candlestick_response_becomes_candlestick_trace() {
    let service = service();
    let state = ChartViewState::new()
        .set_symbol("AAPL")
        .set_chart_type(ChartType::Candlestick);
    let state = submit_and_settle(state, &service);

    let payload = state.fetch.payload().expect("plot expected");
    assert!(matches!(payload, PlotPayload::Candlestick(_)));

    let figure = payload.figure();
    let trace = figure.styled_traces().next().expect("one styled trace");
    assert_eq!(trace.kind(), "candlestick");
    match trace {
        StyledTrace::Candlestick { x, open, high, low, close, name } => {
            assert_eq!(x, &vec!["2024-01-01".to_string()]);
            assert_eq!(open, &vec![1.0]);
            assert_eq!(high, &vec![2.0]);
            assert_eq!(low, &vec![0.5]);
            assert_eq!(close, &vec![1.5]);
            assert_eq!(name, "AAPL Candlestick");
        }
        other => panic!("expected candlestick trace, got {other:?}"),
    }
}

#[test]
fn candlestick_request_uses_trimmed_symbol() {
    let service = service();
    let state = ChartViewState::new()
        .set_symbol("  tsla ")
        .set_chart_type(ChartType::Candlestick);
    submit_and_settle(state, &service);

    let requests = service.source().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].symbol.value(), "tsla");
}

#[test]
fn serialized_trace_has_plotly_type() {
    let service = service();
    let state = ChartViewState::new()
        .set_symbol("AAPL")
        .set_chart_type(ChartType::Candlestick);
    let state = submit_and_settle(state, &service);

    let figure = state.fetch.payload().unwrap().figure();
    let value = serde_json::to_value(&figure).unwrap();
    assert_eq!(value["data"][0]["type"], "candlestick");
    assert_eq!(value["data"][0]["x"], json!(["2024-01-01"]));
    assert_eq!(value["layout"]["title"], "AAPL Candlestick Chart");
}
