// src/app.rs
use eframe::egui;
use rfd::FileDialog;
use tracing::{debug, error, info, warn};

use crate::config::Settings;
use crate::file::{export, AnalysisStore, EframeReader, EframeStorage, KeyValueSource};
use crate::state::WizardSession;
use crate::ui::{history, wizard, UiAction};

pub struct AqalApp {
    settings: Settings,
    session: WizardSession,
    store: AnalysisStore,
    error_message: Option<String>,
}

const NO_STORAGE_MESSAGE: &str =
    "Local storage is unavailable. Completed analyses will be lost when the app closes.";

impl AqalApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let reader = cc.storage.map(EframeReader::new);
        Self::from_storage(settings, reader.as_ref().map(|r| r as &dyn KeyValueSource))
    }

    /// Loads history from `storage`. Without a backend the app still runs, but
    /// warns the user that nothing outlives the session.
    pub fn from_storage(settings: Settings, storage: Option<&dyn KeyValueSource>) -> Self {
        let key = settings.storage_key.clone();
        let (store, error_message) = match storage {
            Some(storage) => (AnalysisStore::load(storage, &key), None),
            None => {
                warn!("Persistence unavailable, analyses will only live for this session");
                (AnalysisStore::new(key), Some(NO_STORAGE_MESSAGE.to_string()))
            }
        };

        Self {
            settings,
            session: WizardSession::new(),
            store,
            error_message,
        }
    }

    /// Applies a view action. Returns true when the store gained a record
    /// and needs persisting.
    fn handle_action(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::Back => {
                self.session.retreat();
            }
            UiAction::Continue => {
                self.session.advance();
            }
            UiAction::Complete => {
                return self.session.complete(&mut self.store).is_some();
            }
            UiAction::ViewHistory => self.session.view_history(),
            UiAction::StartNew => self.session.start_new(),
            UiAction::ExportCsv => self.export_history(),
        }
        false
    }

    fn persist(&mut self, frame: &mut eframe::Frame) {
        let Some(storage) = frame.storage_mut() else {
            debug!(count = self.store.len(), "No storage backend, keeping analyses in memory only");
            return;
        };

        if let Err(e) = self.store.persist(&mut EframeStorage::new(storage)) {
            error!(error = %e, "Failed to persist analyses");
            self.error_message = Some(format!("Failed to save analysis: {}", e));
        }
    }

    fn export_history(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_file_name("aqal-analyses.csv")
            .set_title("Export Analyses");

        let Some(path) = file_dialog.save_file() else {
            return;
        };

        match export::export_csv(self.store.analyses(), &path) {
            Ok(()) => info!(path = %path.display(), "History exported"),
            Err(e) => {
                self.error_message = Some(format!("Failed to export analyses: {}", e));
            }
        }
    }

    fn show_error(&mut self, ctx: &egui::Context) {
        let error_msg = self.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }
    }
}

impl eframe::App for AqalApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if self.session.show_history() {
                    history::show_history_view(
                        ui,
                        self.store.analyses(),
                        self.settings.history.preview_chars,
                    )
                } else {
                    let history_available = self.session.can_view_history(&self.store);
                    wizard::show_wizard_view(ui, &mut self.session, history_available)
                }
            })
            .inner;

        if let Some(action) = action {
            if self.handle_action(action) {
                self.persist(frame);
            }
        }

        self.show_error(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Err(e) = self.store.persist(&mut EframeStorage::new(storage)) {
            warn!(error = %e, "Failed to save analyses on shutdown");
        }
    }
}
