//! Modal alert for import summaries and errors

use eframe::egui;

use crate::core::import::Alert;

pub struct AlertWindow;

impl AlertWindow {
    /// Show the pending alert until it is dismissed
    pub fn show(ctx: &egui::Context, alert: &mut Option<Alert>) {
        let Some(current) = alert.as_ref() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(current.title.as_str())
            .id(egui::Id::new("import_alert"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_max_width(360.0);
                ui.label(current.message.as_str());
                ui.add_space(8.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            *alert = None;
        }
    }
}
