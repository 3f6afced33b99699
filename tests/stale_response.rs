mod common;

use common::MockSource;
use futures::executor::block_on;
use serde_json::json;
use stock_graph_viewer::application::ChartViewService;
use stock_graph_viewer::domain::chart::{Backend, ChartType, PlotPayload};
use stock_graph_viewer::domain::state::ChartViewState;

fn service() -> ChartViewService<MockSource> {
    ChartViewService::new(
        MockSource::new()
            .respond(
                Backend::Candlestick,
                json!({"data": [{"dates": ["d1"], "open": [1], "high": [2], "low": [0], "close": [1]}]}),
            )
            .respond(Backend::Graph, json!({"data": [], "layout": {}})),
    )
}

#[test]
fn late_response_from_older_submit_is_discarded() {
    let service = service();
    let state = ChartViewState::new()
        .set_symbol("AAPL")
        .set_chart_type(ChartType::Candlestick);
    let (state, first) = state.submit();
    let (state, second) = state.set_chart_type(ChartType::Rsi).submit();

    let first = block_on(service.execute(first.unwrap()));
    let second = block_on(service.execute(second.unwrap()));

    // newer one lands first, older one straggles in afterwards
    let state = state.resolve(second).resolve(first);
    assert!(matches!(state.fetch.payload(), Some(PlotPayload::Figure(_))));
    assert_eq!(service.source().call_count(), 2);
}

#[test]
fn older_response_cannot_end_loading_of_newer_submit() {
    let service = service();
    let state = ChartViewState::new()
        .set_symbol("AAPL")
        .set_chart_type(ChartType::Candlestick);
    let (state, first) = state.submit();
    let (state, _pending) = state.submit();

    let state = state.resolve(block_on(service.execute(first.unwrap())));
    assert!(state.fetch.is_loading());
}

#[test]
fn interleaved_futures_keep_latest_result() {
    let service = service();
    let state = ChartViewState::new()
        .set_symbol("AAPL")
        .set_chart_type(ChartType::Rsi);
    let (state, first) = state.submit();
    let (state, second) = state.set_chart_type(ChartType::Candlestick).submit();

    let (first, second) = block_on(futures::future::join(
        service.execute(first.unwrap()),
        service.execute(second.unwrap()),
    ));
    let state = state.resolve(second).resolve(first);
    assert!(matches!(state.fetch.payload(), Some(PlotPayload::Candlestick(_))));
}
