//! Chart Plotter Module
//! Draws chart models as interactive visualizations using egui_plot.

use crate::charts::LineChart;
use egui::Color32;
use egui_plot::{Line, Plot, PlotPoints};

/// Stroke color for plotted lines
pub const LINE_COLOR: Color32 = Color32::from_rgb(31, 119, 180); // Blue

/// Stroke width for plotted lines
pub const LINE_WIDTH: f32 = 1.5;

/// Draws chart models using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw a line chart filling the available space: consecutive points
    /// joined in order, labeled axes, and a background grid when enabled.
    pub fn draw_line_chart(ui: &mut egui::Ui, chart: &LineChart) {
        let points = PlotPoints::from_iter(chart.points().iter().copied());

        Plot::new("line_chart")
            .x_axis_label(chart.x_label())
            .y_axis_label(chart.y_label())
            .show_grid(chart.grid_enabled())
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(points).color(LINE_COLOR).width(LINE_WIDTH));
            });
    }
}
