//! Market data: tickers, suggestions and the boundary to the chart backends.

pub mod repositories;
pub mod value_objects;

pub use repositories::*;
pub use value_objects::*;
