//! Handler für Dialog-Zustand, Optionen und Anwendungsende.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Schließt die Validierungsmeldung.
pub fn dismiss_validation(state: &mut AppState) {
    state.ui.validation_message = None;
}

/// Öffnet die Anleitung.
pub fn open_instructions(state: &mut AppState) {
    state.ui.show_instructions = true;
}

/// Schließt die Anleitung.
pub fn close_instructions(state: &mut AppState) {
    state.ui.show_instructions = false;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options.normalized();
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
