// src/ui/mod.rs
pub mod history;
pub mod wizard;

/// User intents raised by the views; the app applies them to the session and store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Back,
    Continue,
    Complete,
    ViewHistory,
    StartNew,
    ExportCsv,
}
