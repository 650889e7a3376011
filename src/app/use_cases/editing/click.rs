//! Use-Case: Rasterklick gemäß aktivem Modus verarbeiten.

use super::{pick_connection_point, toggle_node_at, toggle_pending_point};
use crate::app::{AppState, InteractionMode};
use crate::core::{GridPoint, NodeKind};

/// Verteilt einen Klick auf Rasterpunkt `point`.
///
/// - Leerlauf: Start-/Endpunkt einer manuellen Verbindung
/// - Platzieren: Input-/Output-Node umschalten (Modus bleibt aktiv)
/// - Layer/Dense: Punkt in der Auswahl umschalten
pub fn click_cell(state: &mut AppState, point: GridPoint) {
    match &mut state.mode {
        InteractionMode::Idle { selected_point } => {
            pick_connection_point(&mut state.substrate, selected_point, point);
        }
        InteractionMode::PlacingInput => {
            toggle_node_at(&mut state.substrate, NodeKind::Input, point);
        }
        InteractionMode::PlacingOutput => {
            toggle_node_at(&mut state.substrate, NodeKind::Output, point);
        }
        InteractionMode::DefiningLayer { selection }
        | InteractionMode::DefiningDenseConnections { selection } => {
            toggle_pending_point(selection, point);
        }
    }
}
