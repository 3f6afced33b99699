pub mod plotly;

pub use plotly::{PlotConfig, purge_figure, render_figure};
