use eframe::egui;

use crate::data::model::SampleBuffer;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WaveViewerApp {
    pub state: AppState,
}

impl WaveViewerApp {
    /// Start with a buffer already loaded from the command line.
    pub fn with_buffer(buffer: SampleBuffer) -> Self {
        let mut state = AppState::default();
        state.set_buffer(buffer);
        Self { state }
    }
}

impl eframe::App for WaveViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::waveform_plot(ui, &self.state);
        });
    }
}
