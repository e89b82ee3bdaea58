//! # Summary Chart
//!
//! Draws the per-category bar chart with egui_plot. Each category is its own
//! bar series so the legend names it, and the total is printed above the bar.

use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Text};
use shared::ChartSummary;

use crate::ui::components::theme::to_color32;

const BAR_WIDTH: f64 = 0.6;

/// Render the chart for `summary` into `ui`
pub fn render_summary_chart(ui: &mut egui::Ui, summary: &ChartSummary) {
    if summary.bars.is_empty() {
        ui.label("No expenses to summarise yet.");
        return;
    }

    let max_total = summary.bars.iter().map(|bar| bar.total).max().unwrap_or(0) as f64;
    let label_offset = (max_total * 0.03).max(1.0);

    Plot::new("expense_summary_plot")
        .legend(Legend::default())
        .x_axis_label(summary.x_label.as_str())
        .y_axis_label(summary.y_label.as_str())
        .include_y(0.0)
        .include_y(max_total * 1.15)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for (index, bar) in summary.bars.iter().enumerate() {
                let x = index as f64;
                let color = to_color32(bar.color);

                let chart = BarChart::new(vec![Bar::new(x, bar.total as f64).width(BAR_WIDTH).fill(color)])
                    .color(color)
                    .name(bar.category.as_str());
                plot_ui.bar_chart(chart);

                plot_ui.text(
                    Text::new(PlotPoint::new(x, bar.total as f64 + label_offset), bar.label.as_str())
                        .anchor(egui::Align2::CENTER_BOTTOM),
                );
            }
        });
}
