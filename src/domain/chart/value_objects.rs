use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - Chart type picked in the selector
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChartType {
    #[default]
    #[display(fmt = "Daily Returns")]
    DailyReturns,
    #[display(fmt = "Rolling Mean")]
    RollingMean,
    #[display(fmt = "Bollinger Bands")]
    BollingerBands,
    #[display(fmt = "RSI")]
    Rsi,
    #[display(fmt = "MACD")]
    Macd,
    #[display(fmt = "Candlestick")]
    Candlestick,
    #[display(fmt = "Trading Volume")]
    TradingVolume,
}

impl ChartType {
    /// Wire name, also used as the `graph_type` query value.
    pub fn as_wire_str(&self) -> &str {
        self.as_ref()
    }

    /// Which of the three backends serves this chart.
    pub fn backend(&self) -> Backend {
        match self {
            ChartType::Candlestick => Backend::Candlestick,
            ChartType::TradingVolume => Backend::Volume,
            ChartType::DailyReturns
            | ChartType::RollingMean
            | ChartType::BollingerBands
            | ChartType::Rsi
            | ChartType::Macd => Backend::Graph,
        }
    }
}

/// Value Object - one backend contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Backend {
    /// `GET /api/stocks/{symbol}/candlestick`
    #[display(fmt = "candlestick")]
    Candlestick,
    /// `GET /api/stocks/{symbol}/volume`
    #[display(fmt = "volume")]
    Volume,
    /// `GET /stock/graph?symbols=..&graph_type=..`, pre-shaped figure
    #[display(fmt = "graph")]
    Graph,
}
