//! Erzeugung dichter Feed-Forward-Verbindungen aus einer Punktauswahl.

use super::{Connection, GridPoint};

/// Erzeugt alle Kandidaten-Verbindungen einer Dense-Auswahl.
///
/// Die Auswahl wird stabil aufsteigend nach y sortiert (gleiche y behalten ihre
/// Auswahlreihenfolge). Für jedes Paar `i < j` entsteht eine Verbindung
/// `sorted[i] → sorted[j]`, sofern `sorted[j].y > sorted[i].y` strikt gilt.
/// Punkte derselben Zeile werden also nie miteinander verbunden.
///
/// Weniger als zwei Punkte ergeben keine Kandidaten.
pub fn dense_candidates(selection: &[GridPoint]) -> Vec<Connection> {
    if selection.len() < 2 {
        return Vec::new();
    }

    let mut sorted = selection.to_vec();
    sorted.sort_by_key(|p| p.y);

    let mut candidates = Vec::new();
    for (i, source) in sorted.iter().enumerate() {
        for target in &sorted[i + 1..] {
            if target.y > source.y {
                candidates.push(Connection::new(*source, *target));
            }
        }
    }

    candidates
}
