use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Waveform plot (central panel)
// ---------------------------------------------------------------------------

/// Render the amplitude-vs-sample-index line plot in the central panel.
pub fn waveform_plot(ui: &mut Ui, state: &AppState) {
    let buffer = match &state.buffer {
        Some(b) => b,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a file to view samples  (File → Open…)");
            });
            return;
        }
    };

    let points: PlotPoints = buffer.plot_points().collect();

    let line = Line::new(points)
        .name(buffer.source_name())
        .color(Color32::LIGHT_BLUE)
        .width(1.5);

    Plot::new("waveform_plot")
        .x_axis_label("sample")
        .y_axis_label("amplitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}
