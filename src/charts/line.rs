//! Line Chart Module
//! Chart model: paired points, axis labels, and the grid flag.

use thiserror::Error;

use crate::data::{linspace, SERIES_POINTS, SERIES_START, SERIES_STOP};

/// Horizontal axis label: nominal bending moment in tonne-force metres.
pub const MOMENT_LABEL: &str = "Mn(tf-m)";

/// Vertical axis label: nominal axial force in tonne-force.
pub const FORCE_LABEL: &str = "Pn(tf)";

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Series length mismatch: x has {x_len} points, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
}

/// A line chart: points connected in order, axis labels, optional grid.
#[derive(Debug, Clone)]
pub struct LineChart {
    points: Vec<[f64; 2]>,
    x_label: String,
    y_label: String,
    grid: bool,
}

impl LineChart {
    /// Pair two coordinate series into a chart.
    ///
    /// The series are zipped element-wise in order; mismatched lengths are
    /// rejected rather than silently truncated.
    pub fn from_series(
        xs: &[f64],
        ys: &[f64],
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        grid: bool,
    ) -> Result<Self, ChartError> {
        if xs.len() != ys.len() {
            return Err(ChartError::LengthMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }

        let points = xs.iter().zip(ys.iter()).map(|(&x, &y)| [x, y]).collect();

        Ok(Self {
            points,
            x_label: x_label.into(),
            y_label: y_label.into(),
            grid,
        })
    }

    /// Plotted points in draw order.
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Horizontal axis label.
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// Vertical axis label.
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Whether the background grid is drawn.
    pub fn grid_enabled(&self) -> bool {
        self.grid
    }
}

/// Build the chart the viewer displays: the identity diagonal over [0, 1]
/// on the moment/force axes, grid on.
pub fn reference_diagonal() -> Result<LineChart, ChartError> {
    let xs = linspace(SERIES_START, SERIES_STOP, SERIES_POINTS);
    let ys = linspace(SERIES_START, SERIES_STOP, SERIES_POINTS);
    LineChart::from_series(&xs, &ys, MOMENT_LABEL, FORCE_LABEL, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_series_construct() {
        let chart = LineChart::from_series(&[0.0, 0.5, 1.0], &[0.0, 0.5, 1.0], "x", "y", true);
        assert!(chart.is_ok());
    }

    #[test]
    fn test_points_pair_in_order() {
        let chart = LineChart::from_series(&[1.0, 2.0], &[3.0, 4.0], "x", "y", false).unwrap();
        assert_eq!(chart.points(), &[[1.0, 3.0], [2.0, 4.0]]);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let xs = vec![0.0; 20];
        let ys = vec![0.0; 19];
        let err = LineChart::from_series(&xs, &ys, "x", "y", true).unwrap_err();
        assert!(matches!(
            err,
            ChartError::LengthMismatch {
                x_len: 20,
                y_len: 19
            }
        ));

        let message = err.to_string();
        assert!(message.contains("20"));
        assert!(message.contains("19"));
    }

    #[test]
    fn test_reference_diagonal_is_identity() {
        let chart = reference_diagonal().unwrap();
        assert_eq!(chart.points().len(), 20);
        assert_eq!(chart.points()[0], [0.0, 0.0]);
        assert_eq!(chart.points()[19], [1.0, 1.0]);

        for point in chart.points() {
            assert_eq!(point[1], point[0]);
        }
    }

    #[test]
    fn test_reference_diagonal_labels_and_grid() {
        let chart = reference_diagonal().unwrap();
        assert_eq!(chart.x_label(), "Mn(tf-m)");
        assert_eq!(chart.y_label(), "Pn(tf)");
        assert!(chart.grid_enabled());
    }
}
