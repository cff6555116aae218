// src/ui/uploader.rs
use eframe::egui;
use rfd::FileDialog;

use crate::state::AppState;
use crate::upload::ALLOWED_EXTENSIONS;

pub fn show_uploader(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui.button("Choose a file").clicked() {
            let file_dialog = FileDialog::new()
                .add_filter("Source files", &ALLOWED_EXTENSIONS)
                .set_title("Select a file to analyze");

            if let Some(path) = file_dialog.pick_file() {
                state.select_path(&path);
            }
        }

        match &state.selected_file {
            Some(file) => {
                ui.label(&file.name);
            }
            None => {
                ui.weak("No file selected");
            }
        }
    });

    ui.add_space(4.0);

    // Disabled with nothing selected; the InFlight guard in submit() still
    // backs this up against double clicks.
    let can_submit = state.selected_file.is_some() && !state.is_loading();
    if ui
        .add_enabled(can_submit, egui::Button::new("Analyze Code"))
        .clicked()
    {
        let ctx = ui.ctx().clone();
        state.submit(&ctx);
    }
}
