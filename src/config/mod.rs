// src/config/mod.rs
pub mod quadrant;
pub mod settings;

// Re-export commonly used types
pub use quadrant::{QuadrantId, QuadrantTemplate, QUADRANTS, template_for_step};
pub use settings::Settings;
