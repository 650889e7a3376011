//! Handler für Rasterklicks und Sitzungs-Reset.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GridPoint;

/// Verarbeitet einen Rasterklick gemäß aktivem Modus.
pub fn click_cell(state: &mut AppState, point: GridPoint) {
    use_cases::editing::click_cell(state, point);
}

/// Verwirft den gesamten Entwurf.
pub fn reset_substrate(state: &mut AppState) {
    use_cases::editing::reset_substrate(state);
}
