// src/state/mod.rs
pub mod draft;
pub mod session;

pub use draft::{Analysis, AnalysisDraft, DraftField};
pub use session::{WizardSession, LAST_STEP};
