//! Main application state and UI coordination

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui;
use uuid::Uuid;

use crate::core::config::AppConfig;
use crate::core::import::{apply_response, Alert, ImportResult};
use crate::core::import_task::ImportTask;
use crate::core::library::Library;
use crate::core::picker::{DialogPicker, FilePicker, PickRequest, PickResponse};
use crate::ui::{alert::AlertWindow, home::HomeScreen, library::LibraryScreen};

/// Screen shown in the central panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Library,
}

/// Main application state
pub struct ReaderApp {
    /// Imported documents
    pub library: Library,
    /// Application configuration
    pub config: AppConfig,
    /// Current screen
    pub screen: Screen,
    /// Alert waiting to be acknowledged
    pub alert: Option<Alert>,
    /// Outstanding picker request
    pub import_task: ImportTask,
    picker: Arc<dyn FilePicker>,
    runtime: tokio::runtime::Runtime,
}

impl ReaderApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self> {
        let visuals = if config.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        cc.egui_ctx.set_visuals(visuals);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("doc-reader-import")
            .enable_all()
            .build()
            .context("Failed to start import runtime")?;

        Ok(Self {
            library: Library::new(),
            config,
            screen: Screen::Home,
            alert: None,
            import_task: ImportTask::new(),
            picker: Arc::new(DialogPicker),
            runtime,
        })
    }

    /// Open the file picker for a new import
    pub fn start_import(&mut self, ctx: &egui::Context) {
        let request =
            PickRequest::documents().with_start_dir(self.config.import.start_dir.clone());
        let repaint = ctx.clone();

        if let Err(e) = self.import_task.start(
            self.runtime.handle(),
            self.picker.clone(),
            request,
            move || repaint.request_repaint(),
        ) {
            tracing::warn!("Could not start import: {}", e);
        }
    }

    /// Apply a finished picker request, if any
    fn poll_import(&mut self) {
        let Some(response) = self.import_task.poll() else {
            return;
        };

        if let Ok(PickResponse::Picked(files)) = &response {
            if let Some(first) = files.first() {
                if self.config.remember_import_dir(Path::new(&first.uri)) {
                    if let Err(e) = self.config.save() {
                        tracing::warn!("Failed to save config: {}", e);
                    }
                }
            }
        }

        let result = apply_response(&mut self.library, response);
        self.finish_import(result);
    }

    fn finish_import(&mut self, result: ImportResult) {
        if let Some(alert) = result.alert() {
            self.alert = Some(alert);
        }
        if result.should_navigate() {
            self.screen = Screen::Library;
        }
    }

    /// Remove a document from the library
    pub fn remove_document(&mut self, id: Uuid) {
        self.library.remove_document(id);
    }

    /// Open a document with the system viewer
    pub fn open_document(&mut self, id: Uuid) {
        let Some(doc) = self.library.get_document(id) else {
            return;
        };
        if let Err(e) = open::that(&doc.uri) {
            tracing::error!("Failed to open {}: {}", doc.uri, e);
            self.alert = Some(Alert::new(
                "Error",
                format!("Could not open {}.", doc.name),
            ));
        }
    }

    /// Render the top navigation bar
    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(self.screen == Screen::Home, "Home")
                    .clicked()
                {
                    self.screen = Screen::Home;
                }
                let library_label = format!("Library ({})", self.library.len());
                if ui
                    .selectable_label(self.screen == Screen::Library, library_label)
                    .clicked()
                {
                    self.screen = Screen::Library;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.import_task.is_running() {
                        ui.spinner();
                        ui.label("Selecting documents...");
                    }
                });
            });
        });
    }
}

impl eframe::App for ReaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_import();

        // Handle keyboard shortcuts
        let add_pressed = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::O));
        if add_pressed && !self.import_task.is_running() {
            self.start_import(ctx);
        }

        self.render_top_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Home => HomeScreen::show(ui, self),
            Screen::Library => LibraryScreen::show(ui, self),
        });

        AlertWindow::show(ctx, &mut self.alert);
    }
}

