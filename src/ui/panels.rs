use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(ui, state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(buffer) = &state.buffer {
            ui.label(format!(
                "{} samples from {}",
                buffer.len(),
                buffer.source_name()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(ui: &Ui, state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open raw sample file")
        .pick_file();

    if let Some(path) = file {
        let filename = path.display().to_string();
        match crate::data::loader::load_file(&filename) {
            Ok(buffer) => {
                log::info!("loaded {} samples from {filename}", buffer.len());
                ui.ctx()
                    .send_viewport_cmd(egui::ViewportCommand::Title(buffer.title()));
                state.set_buffer(buffer);
            }
            Err(e) => {
                log::error!("failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
