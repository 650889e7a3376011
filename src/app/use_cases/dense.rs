//! Use-Case: Dense-Auswahl in Feed-Forward-Verbindungen umsetzen.

use crate::app::AppState;
use crate::core::GridPoint;

/// Verbindet die Auswahl dicht und gibt die Anzahl neuer Verbindungen zurück.
///
/// Weniger als zwei Punkte sind kein Fehler, es passiert schlicht nichts.
pub fn commit_dense_selection(state: &mut AppState, selection: &[GridPoint]) -> usize {
    if selection.len() < 2 {
        log::debug!(
            "Dense-Auswahl mit {} Punkt(en) verworfen",
            selection.len()
        );
        return 0;
    }

    let added = state.substrate.add_dense_connections(selection);
    log::info!(
        "Dense-Verbindungen: {} neu aus {} ausgewählten Punkten",
        added,
        selection.len()
    );
    state.ui.status_message = Some(format!("{} dense connections created", added));
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_selection_is_noop() {
        let mut state = AppState::new();
        assert_eq!(commit_dense_selection(&mut state, &[GridPoint::new(0, 0)]), 0);
        assert!(state.ui.status_message.is_none());
    }

    #[test]
    fn test_status_reports_new_connection_count() {
        let mut state = AppState::new();
        let selection = [GridPoint::new(0, 0), GridPoint::new(0, 1), GridPoint::new(1, 1)];

        assert_eq!(commit_dense_selection(&mut state, &selection), 2);
        assert_eq!(
            state.ui.status_message.as_deref(),
            Some("2 dense connections created")
        );
    }
}
