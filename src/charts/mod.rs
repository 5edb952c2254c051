//! Charts module - chart model and rendering

mod line;
mod plotter;

pub use line::{reference_diagonal, ChartError, LineChart};
pub use plotter::ChartPlotter;
