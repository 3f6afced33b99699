pub mod dto;
pub mod endpoints;

pub use dto::decode_payload;
pub use endpoints::{Endpoint, endpoint_for};

use gloo_net::http::Request;
use serde_json::Value;

use crate::domain::{
    chart::PlotPayload,
    errors::FetchError,
    logging::LogComponent,
    market_data::ChartDataSource,
    state::FetchRequest,
};
use crate::infrastructure::config::BackendConfig;
use crate::log_info;

/// Fetches chart payloads from the three backends over plain GET.
///
/// No timeout, retry or cancellation: one call is one request, and an
/// unresponsive backend keeps the future pending.
#[derive(Clone, Debug)]
pub struct HttpChartDataSource {
    config: BackendConfig,
}

impl Default for HttpChartDataSource {
    fn default() -> Self {
        Self::new(BackendConfig::default())
    }
}

impl HttpChartDataSource {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    async fn get_json(&self, endpoint: &Endpoint) -> Result<Value, FetchError> {
        let request = endpoint
            .query
            .iter()
            .fold(Request::get(&endpoint.url), |req, (key, value)| {
                req.query([(*key, value.as_str())])
            });

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to send request: {e:?}")))?;

        check_status(response.status(), response.status_text())?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read body: {e:?}")))?;
        parse_body(&body)
    }
}

/// Anything outside 2xx is a failure, whatever the body says.
fn check_status(status: u16, status_text: String) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Http { status, status_text })
    }
}

fn parse_body(body: &str) -> Result<Value, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(format!("Failed to parse JSON: {e}")))
}

impl ChartDataSource for HttpChartDataSource {
    async fn fetch(&self, request: &FetchRequest) -> Result<PlotPayload, FetchError> {
        let endpoint = endpoint_for(&self.config, request);
        log_info!(
            LogComponent::Infrastructure("ChartHttp"),
            "📈 {} {} → {}",
            request.token,
            request.chart_type,
            endpoint.display_url()
        );

        let body = self.get_json(&endpoint).await?;
        let payload = decode_payload(request.chart_type, request.symbol.clone(), body)?;

        log_info!(
            LogComponent::Infrastructure("ChartHttp"),
            "✅ {} {} payload decoded",
            request.token,
            request.chart_type.backend()
        );
        Ok(payload)
    }
}
