//! UI state of the chart view as one immutable value.
//!
//! Every user action is a pure transition `&ChartViewState -> ChartViewState`.
//! Submitting hands out a [`RequestToken`]; a settled response is applied
//! only when it carries the most recent token, so an older request that
//! resolves late can never overwrite a newer result.

use derive_more::Display;

use crate::domain::chart::{ChartType, PlotPayload};
use crate::domain::errors::FetchError;
use crate::domain::logging::LogComponent;
use crate::log_debug;
use crate::domain::market_data::{Symbol, suggest};

/// What the user has typed and picked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    /// Raw input, untrimmed and in the case it was typed.
    pub symbol: String,
    pub chart_type: ChartType,
}

/// Fetch lifecycle. Exactly one is active.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(PlotPayload),
    Failure(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn payload(&self) -> Option<&PlotPayload> {
        match self {
            FetchState::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            FetchState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonically increasing id of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display)]
#[display(fmt = "#{}", _0)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// One outbound request, fixed at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub token: RequestToken,
    pub symbol: Symbol,
    pub chart_type: ChartType,
}

/// A settled request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub token: RequestToken,
    pub result: Result<PlotPayload, FetchError>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartViewState {
    pub selection: Selection,
    pub fetch: FetchState,
    latest_token: RequestToken,
}

impl ChartViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest_token(&self) -> RequestToken {
        self.latest_token
    }

    /// Stores the input verbatim.
    pub fn set_symbol(&self, text: impl Into<String>) -> Self {
        Self {
            selection: Selection { symbol: text.into(), ..self.selection.clone() },
            ..self.clone()
        }
    }

    pub fn set_chart_type(&self, chart_type: ChartType) -> Self {
        Self {
            selection: Selection { chart_type, ..self.selection.clone() },
            ..self.clone()
        }
    }

    /// Clicking a suggestion replaces the input with that ticker.
    pub fn select_suggestion(&self, symbol: &str) -> Self {
        self.set_symbol(symbol)
    }

    /// Known tickers matching the current input, recomputed on demand.
    pub fn suggestions(&self) -> Vec<&'static str> {
        suggest(&self.selection.symbol)
    }

    /// Guarded submit.
    ///
    /// A blank symbol fails immediately and yields no request. Otherwise the
    /// state moves to `Loading` and the returned request must be executed
    /// exactly once. Either way the latest token advances, which retires
    /// any request still in flight.
    pub fn submit(&self) -> (Self, Option<FetchRequest>) {
        let token = self.latest_token.next();
        match Symbol::parse(&self.selection.symbol) {
            None => {
                let err = FetchError::Validation("symbol is blank after trimming".to_string());
                log_debug!(LogComponent::Domain("ChartView"), "submit {token} rejected: {err}");
                let next = Self {
                    fetch: FetchState::Failure(err.user_message().to_string()),
                    latest_token: token,
                    ..self.clone()
                };
                (next, None)
            }
            Some(symbol) => {
                let request = FetchRequest {
                    token,
                    symbol,
                    chart_type: self.selection.chart_type,
                };
                let next = Self {
                    fetch: FetchState::Loading,
                    latest_token: token,
                    ..self.clone()
                };
                (next, Some(request))
            }
        }
    }

    /// Apply a settled request. Outcomes for superseded tokens are dropped.
    pub fn resolve(&self, outcome: FetchOutcome) -> Self {
        if outcome.token != self.latest_token {
            log_debug!(
                LogComponent::Domain("ChartView"),
                "discarding stale response {} (latest is {})",
                outcome.token,
                self.latest_token
            );
            return self.clone();
        }

        let fetch = match outcome.result {
            Ok(payload) => FetchState::Success(payload),
            Err(err) => FetchState::Failure(err.user_message().to_string()),
        };
        Self { fetch, ..self.clone() }
    }
}
