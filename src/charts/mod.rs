//! Charts module - scatter chart specification and rendering

mod plotter;
mod renderer;
mod scatter;

pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};
pub use scatter::{standard_views, ChartError, ScatterBuilder, ScatterChart};
