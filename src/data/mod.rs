//! Data module - reference series generation

mod series;

pub use series::{linspace, SERIES_POINTS, SERIES_START, SERIES_STOP};
