//! Use-Case: Entwurf verwerfen und neu beginnen.

use crate::app::{AppState, InteractionMode};
use crate::core::Substrate;

/// Setzt Substrat und Modus auf den Ausgangszustand zurück.
pub fn reset_substrate(state: &mut AppState) {
    state.substrate = Substrate::new();
    state.mode = InteractionMode::default();
    state.ui.validation_message = None;
    state.ui.status_message = None;
    log::info!("Substrat zurückgesetzt");
}
