//! Home screen with the import entry point

use eframe::egui;

use crate::app::ReaderApp;

/// Landing screen
pub struct HomeScreen;

impl HomeScreen {
    /// Show the home screen
    pub fn show(ui: &mut egui::Ui, app: &mut ReaderApp) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.2);

            ui.label(egui::RichText::new("\u{1F4D6}").size(64.0));
            ui.label(egui::RichText::new("Document Reader").size(32.0).strong());
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("Select PDF and DOCX files to read with instant word lookup")
                    .size(18.0)
                    .weak(),
            );

            ui.add_space(48.0);

            let button = egui::Button::new(egui::RichText::new("+  Add Documents").size(18.0).strong())
                .min_size(egui::vec2(220.0, 48.0));
            let enabled = !app.import_task.is_running();
            if ui
                .add_enabled(enabled, button)
                .on_hover_text("Ctrl+O")
                .clicked()
            {
                app.start_import(ui.ctx());
            }

            ui.add_space(48.0);
            ui.label(egui::RichText::new(library_count(app.library.len())).size(16.0).weak());
        });
    }
}

/// "N document(s) in library"
pub fn library_count(count: usize) -> String {
    format!(
        "{} document{} in library",
        count,
        if count == 1 { "" } else { "s" }
    )
}
