//! Application State — zentrale Datenhaltung.

mod app_state;
mod dialogs;
mod editor;

pub use app_state::AppState;
pub use dialogs::UiState;
pub use editor::{InteractionMode, ModeKind};
