use std::rc::Rc;

use crate::domain::{
    logging::{LogComponent, LogLevel, get_logger},
    market_data::ChartDataSource,
    state::{FetchOutcome, FetchRequest},
};
use crate::log_debug;

/// Runs the requests the chart view issues.
///
/// Single-shot: no retry, no timeout, no deduplication. Failures are
/// written to the developer log in full and returned so the view can show
/// its one generic message.
pub struct ChartViewService<S: ChartDataSource> {
    source: Rc<S>,
}

impl<S: ChartDataSource> Clone for ChartViewService<S> {
    fn clone(&self) -> Self {
        Self { source: Rc::clone(&self.source) }
    }
}

impl<S: ChartDataSource> ChartViewService<S> {
    pub fn new(source: S) -> Self {
        Self { source: Rc::new(source) }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Issue exactly one outbound request for `request`.
    pub async fn execute(&self, request: FetchRequest) -> FetchOutcome {
        log_debug!(
            LogComponent::Application("ChartViewService"),
            "🚀 request {} for {} ({})",
            request.token,
            request.symbol,
            request.chart_type.as_wire_str()
        );

        let result = self.source.fetch(&request).await;

        if let Err(err) = &result {
            get_logger().emit_with_metadata(
                LogLevel::Error,
                LogComponent::Application("ChartViewService"),
                &format!("❌ request {} failed: {err}", request.token),
                &format!("symbol={} chart_type={}", request.symbol, request.chart_type.as_wire_str()),
            );
        }

        FetchOutcome { token: request.token, result }
    }
}
