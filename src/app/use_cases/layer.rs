//! Use-Case: Layer-Auswahl abschließen.

use crate::app::{AppState, InteractionMode};
use crate::core::{GridPoint, Layer};

/// Bildet einen Layer aus `selection` und hängt ihn an die Historie an.
///
/// Gibt den Index des neuen Layers zurück.
pub fn commit_layer(state: &mut AppState, selection: &[GridPoint]) -> anyhow::Result<usize> {
    let layer = Layer::from_selection(selection)?;
    log::info!(
        "Layer {} definiert: Shape {:?} ({} Nodes)",
        state.substrate.layers().len(),
        layer.shape,
        layer.node_count()
    );
    state.substrate.push_layer(layer);
    state.ui.validation_message = None;
    Ok(state.substrate.layers().len() - 1)
}

/// Explizites Abschließen im Layer-Modus (Enter).
///
/// Mit zu wenigen Punkten wird eine Validierungsmeldung gesetzt; Auswahl und
/// Modus bleiben erhalten, damit weitere Punkte ergänzt werden können.
pub fn finish_layer(state: &mut AppState) {
    let InteractionMode::DefiningLayer { selection } = &state.mode else {
        log::debug!("Layer abschließen ignoriert: kein Layer-Modus aktiv");
        return;
    };
    let points: Vec<GridPoint> = selection.iter().copied().collect();

    match commit_layer(state, &points) {
        Ok(_) => state.mode = InteractionMode::default(),
        Err(e) => {
            log::warn!("Layer-Validierung fehlgeschlagen: {}", e);
            state.ui.validation_message = Some(e.to_string());
        }
    }
}
