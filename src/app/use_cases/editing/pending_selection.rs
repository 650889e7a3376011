//! Use-Case: Mehrfachauswahl für Layer- und Dense-Modus.

use crate::core::GridPoint;
use indexmap::IndexSet;

/// Schaltet `point` in der laufenden Auswahl um (Reihenfolge der übrigen bleibt erhalten).
pub fn toggle_pending_point(selection: &mut IndexSet<GridPoint>, point: GridPoint) {
    if selection.shift_remove(&point) {
        log::debug!("{} aus Auswahl entfernt ({} Punkte)", point, selection.len());
    } else {
        selection.insert(point);
        log::debug!("{} zur Auswahl hinzugefügt ({} Punkte)", point, selection.len());
    }
}
