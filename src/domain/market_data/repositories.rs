use crate::domain::chart::PlotPayload;
use crate::domain::errors::FetchError;
use crate::domain::state::FetchRequest;

/// Boundary to the chart backends.
///
/// One call is exactly one outbound request. Implementations pick the
/// backend from `request.chart_type` and return a payload already checked
/// against that backend's contract.
#[allow(async_fn_in_trait)]
pub trait ChartDataSource {
    async fn fetch(&self, request: &FetchRequest) -> Result<PlotPayload, FetchError>;
}
