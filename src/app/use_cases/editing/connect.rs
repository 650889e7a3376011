//! Use-Case: Manuelle Verbindungen über zwei Klicks (Leerlauf-Modus).

use crate::core::{ConnectionToggle, GridPoint, Substrate};

/// Verarbeitet einen Klick im Leerlauf.
///
/// Beim ersten Klick wird der Startpunkt gesetzt. Beim zweiten Klick auf einen
/// anderen Punkt wird die Verbindung umgeschaltet, ein zweiter Klick auf denselben
/// Punkt hebt nur die Auswahl auf. In beiden Fällen ist danach kein Startpunkt gesetzt.
pub fn pick_connection_point(
    substrate: &mut Substrate,
    selected_point: &mut Option<GridPoint>,
    point: GridPoint,
) {
    let Some(start) = selected_point.take() else {
        *selected_point = Some(point);
        log::debug!("Startpunkt {} gewählt", point);
        return;
    };

    match substrate.toggle_connection(start, point) {
        ConnectionToggle::Added => log::info!("Verbindung {} → {} erstellt", start, point),
        ConnectionToggle::Removed => log::info!("Verbindung {} – {} entfernt", start, point),
        ConnectionToggle::Ignored => log::debug!("Startpunkt {} abgewählt", point),
    }
}
