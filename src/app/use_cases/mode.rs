//! Use-Case: Moduswechsel (Toolbar) und Abbruch (Escape).

use super::{dense, layer};
use crate::app::{AppState, InteractionMode, ModeKind};
use crate::core::{GridPoint, MIN_LAYER_NODES};

/// Schaltet `mode` um.
///
/// Ist ein anderer Modus aktiv, wird er samt Zwischenauswahl verworfen und
/// `mode` frisch betreten. Ist `mode` selbst aktiv, geht es zurück in den
/// Leerlauf; Layer- und Dense-Auswahl werden dabei ab zwei Punkten
/// abgeschlossen, kleinere Auswahlen still verworfen.
pub fn toggle_mode(state: &mut AppState, mode: ModeKind) {
    let previous = std::mem::take(&mut state.mode);

    if previous.kind() != Some(mode) {
        log_discarded(&previous);
        state.mode = InteractionMode::enter(mode);
        return;
    }

    match previous {
        InteractionMode::DefiningLayer { selection } => {
            let points: Vec<GridPoint> = selection.into_iter().collect();
            if points.len() >= MIN_LAYER_NODES {
                if let Err(e) = layer::commit_layer(state, &points) {
                    log::warn!("Layer nicht übernommen: {:#}", e);
                }
            } else {
                log::debug!("Layer-Auswahl mit {} Punkt(en) verworfen", points.len());
            }
        }
        InteractionMode::DefiningDenseConnections { selection } => {
            let points: Vec<GridPoint> = selection.into_iter().collect();
            dense::commit_dense_selection(state, &points);
        }
        _ => {}
    }
}

/// Verlässt den aktiven Modus, ohne etwas abzuschließen.
///
/// Verwirft jede Zwischenauswahl unabhängig von ihrer Größe und hebt auch den
/// Startpunkt einer manuellen Verbindung auf.
pub fn cancel_mode(state: &mut AppState) {
    let previous = std::mem::take(&mut state.mode);
    log_discarded(&previous);
}

fn log_discarded(previous: &InteractionMode) {
    match previous {
        InteractionMode::Idle {
            selected_point: Some(point),
        } => log::debug!("Startpunkt {} verworfen", point),
        InteractionMode::DefiningLayer { selection }
        | InteractionMode::DefiningDenseConnections { selection }
            if !selection.is_empty() =>
        {
            log::info!(
                "{:?} abgebrochen, {} ausgewählte Punkte verworfen",
                previous.kind(),
                selection.len()
            );
        }
        _ => {}
    }
}
