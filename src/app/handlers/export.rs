//! Handler für den JSON-Export.

use crate::app::use_cases;
use crate::app::AppState;

/// Fordert den Export-Dateidialog an.
pub fn request_dialog(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Schreibt das Substrat in die gewählte Datei.
pub fn export_to_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    use_cases::export::export_to_file(state, path)
}
