use serde_json::Value;

use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::market_data::Symbol;

/// OHLC series from the candlestick backend. All columns share one length.
#[derive(Debug, Clone, PartialEq)]
pub struct CandlestickSeries {
    pub symbol: Symbol,
    pub dates: Vec<String>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

impl CandlestickSeries {
    pub fn new(
        symbol: Symbol,
        dates: Vec<String>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
    ) -> FetchResult<Self> {
        let len = dates.len();
        let columns = [
            ("open", open.len()),
            ("high", high.len()),
            ("low", low.len()),
            ("close", close.len()),
        ];
        if let Some((name, other)) = columns.into_iter().find(|(_, n)| *n != len) {
            return Err(FetchError::shape(format!(
                "candlestick column `{name}` has {other} values for {len} dates"
            )));
        }
        Ok(Self { symbol, dates, open, high, low, close })
    }
}

/// Daily traded volume from the volume backend.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSeries {
    pub symbol: Symbol,
    pub dates: Vec<String>,
    pub volumes: Vec<f64>,
}

impl VolumeSeries {
    pub fn new(symbol: Symbol, dates: Vec<String>, volumes: Vec<f64>) -> FetchResult<Self> {
        if dates.len() != volumes.len() {
            return Err(FetchError::shape(format!(
                "volume response has {} dates but {} values",
                dates.len(),
                volumes.len()
            )));
        }
        Ok(Self { symbol, dates, volumes })
    }
}

/// A successfully fetched plot, one variant per backend contract.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotPayload {
    Candlestick(CandlestickSeries),
    Volume(VolumeSeries),
    /// `{data, layout}` from the graph backend, kept verbatim.
    Figure(Value),
}
