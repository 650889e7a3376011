//! Datei-Dialoge und modale Fenster.

mod export_dialog;
mod instructions;
mod validation;

pub use export_dialog::handle_export_dialog;
pub use instructions::show_instructions_popup;
pub use validation::show_validation_dialog;
