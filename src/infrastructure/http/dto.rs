use serde::Deserialize;
use serde_json::Value;

use crate::domain::chart::{Backend, CandlestickSeries, ChartType, PlotPayload, VolumeSeries};
use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::market_data::Symbol;

/// `{ "data": [ {dates, open, high, low, close}, ... ] }`
#[derive(Debug, Deserialize)]
struct CandlestickResponse {
    data: Vec<CandlestickDto>,
}

#[derive(Debug, Deserialize)]
struct CandlestickDto {
    /// The candlestick service has shipped this column as both `dates` and `x`.
    #[serde(alias = "x")]
    dates: Vec<String>,
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
}

/// `{ "x": [...dates], "y": [...volumes] }`
#[derive(Debug, Deserialize)]
struct VolumeResponse {
    x: Vec<String>,
    y: Vec<f64>,
}

/// Check a response body against the contract of the backend serving
/// `chart_type` and turn it into a payload.
pub fn decode_payload(chart_type: ChartType, symbol: Symbol, body: Value) -> FetchResult<PlotPayload> {
    match chart_type.backend() {
        Backend::Candlestick => {
            let response: CandlestickResponse = from_value(body)?;
            // only the first series is plotted
            let first = response
                .data
                .into_iter()
                .next()
                .ok_or_else(|| FetchError::shape("candlestick response has an empty `data` array"))?;
            CandlestickSeries::new(symbol, first.dates, first.open, first.high, first.low, first.close)
                .map(PlotPayload::Candlestick)
        }
        Backend::Volume => {
            let response: VolumeResponse = from_value(body)?;
            VolumeSeries::new(symbol, response.x, response.y).map(PlotPayload::Volume)
        }
        Backend::Graph => {
            let has_traces = body.get("data").map(Value::is_array).unwrap_or(false);
            if !has_traces {
                return Err(FetchError::shape("graph response has no `data` array"));
            }
            Ok(PlotPayload::Figure(body))
        }
    }
}

fn from_value<T: serde::de::DeserializeOwned>(body: Value) -> FetchResult<T> {
    serde_json::from_value(body).map_err(|e| FetchError::shape(e.to_string()))
}
