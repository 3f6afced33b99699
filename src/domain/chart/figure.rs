//! The single plotting representation every payload is normalized into
//! before it reaches the plotting widget.

use serde::Serialize;
use serde_json::{Map, Value};

use super::entities::{CandlestickSeries, PlotPayload, VolumeSeries};

/// `{data, layout}` as the plotting widget expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Trace {
    Styled(StyledTrace),
    /// Trace produced server-side, forwarded untouched.
    Raw(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StyledTrace {
    Candlestick {
        x: Vec<String>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        name: String,
    },
    Bar {
        x: Vec<String>,
        y: Vec<f64>,
        name: String,
    },
}

impl StyledTrace {
    pub fn kind(&self) -> &'static str {
        match self {
            StyledTrace::Candlestick { .. } => "candlestick",
            StyledTrace::Bar { .. } => "bar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Layout {
    Styled(ChartLayout),
    Raw(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeslider: Option<RangeSlider>,
}

impl Axis {
    pub fn titled(title: &str) -> Self {
        Self { title: title.to_string(), rangeslider: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeSlider {
    pub visible: bool,
}

impl From<&CandlestickSeries> for Figure {
    fn from(series: &CandlestickSeries) -> Self {
        let symbol = series.symbol.value();
        Figure {
            data: vec![Trace::Styled(StyledTrace::Candlestick {
                x: series.dates.clone(),
                open: series.open.clone(),
                high: series.high.clone(),
                low: series.low.clone(),
                close: series.close.clone(),
                name: format!("{symbol} Candlestick"),
            })],
            layout: Layout::Styled(ChartLayout {
                title: format!("{symbol} Candlestick Chart"),
                xaxis: Axis {
                    title: "Date".to_string(),
                    rangeslider: Some(RangeSlider { visible: false }),
                },
                yaxis: Axis::titled("Price"),
            }),
        }
    }
}

impl From<&VolumeSeries> for Figure {
    fn from(series: &VolumeSeries) -> Self {
        let symbol = series.symbol.value();
        Figure {
            data: vec![Trace::Styled(StyledTrace::Bar {
                x: series.dates.clone(),
                y: series.volumes.clone(),
                name: format!("{symbol} Trading Volume"),
            })],
            layout: Layout::Styled(ChartLayout {
                title: format!("{symbol} Trading Volume"),
                xaxis: Axis::titled("Date"),
                yaxis: Axis::titled("Volume"),
            }),
        }
    }
}

impl Figure {
    /// Wrap a pre-shaped `{data, layout}` document. A missing layout becomes `{}`.
    pub fn passthrough(document: &Value) -> Self {
        let data = document
            .get("data")
            .and_then(Value::as_array)
            .map(|traces| traces.iter().cloned().map(Trace::Raw).collect())
            .unwrap_or_default();
        let layout = document
            .get("layout")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        Figure { data, layout: Layout::Raw(layout) }
    }

    pub fn styled_traces(&self) -> impl Iterator<Item = &StyledTrace> {
        self.data.iter().filter_map(|trace| match trace {
            Trace::Styled(styled) => Some(styled),
            Trace::Raw(_) => None,
        })
    }
}

impl PlotPayload {
    /// Normalize into the representation handed to the plotting widget.
    pub fn figure(&self) -> Figure {
        match self {
            PlotPayload::Candlestick(series) => series.into(),
            PlotPayload::Volume(series) => series.into(),
            PlotPayload::Figure(document) => Figure::passthrough(document),
        }
    }
}
