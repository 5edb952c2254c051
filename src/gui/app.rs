//! Refline Main Application
//! Main window displaying the reference line chart.

use crate::charts::{reference_diagonal, ChartError, ChartPlotter, LineChart};

/// Main application window.
pub struct ReflineApp {
    chart: LineChart,
}

impl ReflineApp {
    /// Build the application together with the chart it displays.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, ChartError> {
        let chart = reference_diagonal()?;
        log::info!(
            "Prepared reference chart: {} points, x axis '{}', y axis '{}'",
            chart.points().len(),
            chart.x_label(),
            chart.y_label()
        );

        Ok(Self { chart })
    }
}

impl eframe::App for ReflineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ChartPlotter::draw_line_chart(ui, &self.chart);
        });
    }
}
