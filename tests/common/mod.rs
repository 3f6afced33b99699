#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use futures::executor::block_on;
use serde_json::Value;
use stock_graph_viewer::application::ChartViewService;
use stock_graph_viewer::domain::chart::{Backend, PlotPayload};
use stock_graph_viewer::domain::errors::FetchError;
use stock_graph_viewer::domain::market_data::ChartDataSource;
use stock_graph_viewer::domain::state::{ChartViewState, FetchRequest};
use stock_graph_viewer::infrastructure::http::decode_payload;

/// Canned backend: one response body (or error) per backend, every request recorded.
#[derive(Default)]
pub struct MockSource {
    responses: HashMap<Backend, Result<Value, FetchError>>,
    requests: RefCell<Vec<FetchRequest>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, backend: Backend, body: Value) -> Self {
        self.responses.insert(backend, Ok(body));
        self
    }

    pub fn fail(mut self, backend: Backend, err: FetchError) -> Self {
        self.responses.insert(backend, Err(err));
        self
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.borrow().clone()
    }
}

impl ChartDataSource for MockSource {
    async fn fetch(&self, request: &FetchRequest) -> Result<PlotPayload, FetchError> {
        self.requests.borrow_mut().push(request.clone());
        match self.responses.get(&request.chart_type.backend()) {
            Some(Ok(body)) => decode_payload(request.chart_type, request.symbol.clone(), body.clone()),
            Some(Err(err)) => Err(err.clone()),
            None => Err(FetchError::Network("connection refused".to_string())),
        }
    }
}

/// Submit, run the request if one was issued, and apply its outcome.
pub fn submit_and_settle(state: ChartViewState, service: &ChartViewService<MockSource>) -> ChartViewState {
    let (state, request) = state.submit();
    match request {
        Some(request) => {
            let outcome = block_on(service.execute(request));
            state.resolve(outcome)
        }
        None => state,
    }
}
