use crate::domain::chart::Backend;
use crate::domain::state::FetchRequest;
use crate::infrastructure::config::BackendConfig;

/// Resolved target of one GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub query: Vec<(&'static str, String)>,
}

impl Endpoint {
    /// Full URL with the query string appended, for logging.
    pub fn display_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query: Vec<String> = self
            .query
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        format!("{}?{}", self.url, query.join("&"))
    }
}

/// Pick the backend for `request.chart_type` and build its URL.
pub fn endpoint_for(config: &BackendConfig, request: &FetchRequest) -> Endpoint {
    let symbol = request.symbol.value();
    match request.chart_type.backend() {
        Backend::Candlestick => Endpoint {
            url: format!("{}/api/stocks/{}/candlestick", config.candlestick_url, symbol),
            query: Vec::new(),
        },
        Backend::Volume => Endpoint {
            url: format!("{}/api/stocks/{}/volume", config.volume_url, symbol),
            query: Vec::new(),
        },
        Backend::Graph => Endpoint {
            url: format!("{}/stock/graph", config.graph_url),
            query: vec![
                ("symbols", symbol.to_string()),
                ("graph_type", request.chart_type.as_wire_str().to_string()),
            ],
        },
    }
}
