use derive_more::Display;

/// Shown when submit is attempted with a blank symbol.
pub const EMPTY_SYMBOL_MESSAGE: &str = "Please enter a stock symbol.";

/// Shown for every network, HTTP or response-shape failure.
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch graph data. Please check the symbol or backend.";

/// Everything that can go wrong between pressing submit and having a plot.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum FetchError {
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(String),
    #[display(fmt = "Network Error: {}", _0)]
    Network(String),
    #[display(fmt = "HTTP Error: {} {}", status, status_text)]
    Http { status: u16, status_text: String },
    #[display(fmt = "Decode Error: {}", _0)]
    Decode(String),
    #[display(fmt = "Response Shape Error: {}", _0)]
    Shape(String),
}

impl std::error::Error for FetchError {}

impl FetchError {
    /// The single static string the page is allowed to show for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Validation(_) => EMPTY_SYMBOL_MESSAGE,
            _ => FETCH_FAILED_MESSAGE,
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        FetchError::Shape(message.into())
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Failures handing a figure to the plotting widget.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum RenderError {
    #[display(fmt = "Rendering Error: plotting widget `{}` is not loaded", _0)]
    WidgetMissing(&'static str),
    #[display(fmt = "Rendering Error: {}", _0)]
    Serialize(String),
    #[display(fmt = "Rendering Error: widget threw {}", _0)]
    Widget(String),
}

impl std::error::Error for RenderError {}
