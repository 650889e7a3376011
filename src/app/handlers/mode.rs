//! Handler für Moduswechsel, Abschluss und Abbruch.

use crate::app::use_cases;
use crate::app::{AppState, ModeKind};

/// Schaltet einen Modus um (Re-Toggle schließt Layer/Dense ab).
pub fn toggle(state: &mut AppState, mode: ModeKind) {
    use_cases::mode::toggle_mode(state, mode);
    log::info!("Modus: {:?}", state.mode.kind());
}

/// Schließt die Layer-Auswahl mit Validierung ab.
pub fn finish_layer(state: &mut AppState) {
    use_cases::layer::finish_layer(state);
}

/// Verlässt den aktiven Modus ohne Abschluss.
pub fn cancel(state: &mut AppState) {
    use_cases::mode::cancel_mode(state);
}
