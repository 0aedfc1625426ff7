//! Library screen listing imported documents

use chrono::Local;
use eframe::egui;
use uuid::Uuid;

use crate::app::ReaderApp;
use crate::core::document::{Document, DocumentType};

/// Action requested from a library row
enum RowAction {
    Open(Uuid),
    Remove(Uuid),
}

/// Document list
pub struct LibraryScreen;

impl LibraryScreen {
    /// Show the library screen
    pub fn show(ui: &mut egui::Ui, app: &mut ReaderApp) {
        ui.horizontal(|ui| {
            ui.heading("Library");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let enabled = !app.import_task.is_running();
                if ui
                    .add_enabled(enabled, egui::Button::new("+ Add"))
                    .on_hover_text("Add documents")
                    .clicked()
                {
                    app.start_import(ui.ctx());
                }
            });
        });

        ui.separator();

        if app.library.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label("No documents yet");
                ui.weak("Add PDF or DOCX files from the home screen.");
            });
            return;
        }

        let mut action = None;
        egui::ScrollArea::vertical()
            .id_salt("library_scroll")
            .show(ui, |ui| {
                egui::Grid::new("library_grid")
                    .num_columns(5)
                    .striped(true)
                    .spacing([16.0, 8.0])
                    .show(ui, |ui| {
                        for doc in app.library.documents() {
                            if let Some(a) = Self::show_row(ui, doc) {
                                action = Some(a);
                            }
                            ui.end_row();
                        }
                    });
            });

        match action {
            Some(RowAction::Open(id)) => app.open_document(id),
            Some(RowAction::Remove(id)) => app.remove_document(id),
            None => {}
        }
    }

    /// Show one document row
    fn show_row(ui: &mut egui::Ui, doc: &Document) -> Option<RowAction> {
        let mut action = None;

        ui.label(egui::RichText::new(doc.doc_type.label()).color(type_color(doc.doc_type)).strong());
        ui.label(&doc.name).on_hover_text(&doc.uri);
        ui.weak(doc.formatted_size());
        ui.weak(
            doc.date_added
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
        );
        ui.horizontal(|ui| {
            if ui.button("Open").clicked() {
                action = Some(RowAction::Open(doc.id));
            }
            if ui.button("Remove").clicked() {
                action = Some(RowAction::Remove(doc.id));
            }
        });

        action
    }
}

fn type_color(doc_type: DocumentType) -> egui::Color32 {
    match doc_type {
        DocumentType::Pdf => egui::Color32::from_rgb(0xE5, 0x48, 0x4D),
        DocumentType::Docx => egui::Color32::from_rgb(0x3E, 0x63, 0xDD),
    }
}
