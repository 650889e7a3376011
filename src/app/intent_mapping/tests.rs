use crate::app::{AppCommand, AppIntent, AppState, InteractionMode, ModeKind};
use crate::core::GridPoint;

use super::map_intent_to_commands;

#[test]
fn grid_click_maps_to_single_click_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::GridCellClicked {
            point: GridPoint::new(2, -3),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::ClickCell { point } if point == GridPoint::new(2, -3)
    ));
}

#[test]
fn clear_all_cancels_mode_before_reset() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ClearAllRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::CancelMode));
    assert!(matches!(commands[1], AppCommand::ResetSubstrate));
}

#[test]
fn finish_selection_maps_per_mode() {
    let mut state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::FinishSelectionRequested).is_empty());

    state.mode = InteractionMode::enter(ModeKind::DefiningLayer);
    let commands = map_intent_to_commands(&state, AppIntent::FinishSelectionRequested);
    assert!(matches!(commands.as_slice(), [AppCommand::FinishLayer]));
}

#[test]
fn finish_in_dense_mode_toggles_dense_off() {
    let mut state = AppState::new();
    state.mode = InteractionMode::enter(ModeKind::DefiningDenseConnections);

    let commands = map_intent_to_commands(&state, AppIntent::FinishSelectionRequested);

    assert!(matches!(
        commands.as_slice(),
        [AppCommand::ToggleMode {
            mode: ModeKind::DefiningDenseConnections
        }]
    ));
}

#[test]
fn export_path_is_forwarded() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ExportPathSelected {
            path: "/tmp/hn-substrate.json".to_string(),
        },
    );

    match commands.as_slice() {
        [AppCommand::ExportToFile { path }] => assert_eq!(path, "/tmp/hn-substrate.json"),
        other => panic!("Unerwartete Commands: {other:?}"),
    }
}
