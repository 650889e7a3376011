//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, ModeKind};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::GridCellClicked { point } => vec![AppCommand::ClickCell { point }],
        AppIntent::ToggleModeRequested { mode } => vec![AppCommand::ToggleMode { mode }],
        AppIntent::FinishSelectionRequested => {
            // Enter im Dense-Modus schließt die Dense-Auswahl wie der Toolbar-Button ab
            match state.mode.kind() {
                Some(ModeKind::DefiningLayer) => vec![AppCommand::FinishLayer],
                Some(ModeKind::DefiningDenseConnections) => vec![AppCommand::ToggleMode {
                    mode: ModeKind::DefiningDenseConnections,
                }],
                _ => vec![],
            }
        }
        AppIntent::CancelRequested => vec![AppCommand::CancelMode],
        AppIntent::ExportRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ExportToFile { path }],
        AppIntent::ValidationDismissed => vec![AppCommand::DismissValidation],
        AppIntent::InstructionsRequested => vec![AppCommand::OpenInstructions],
        AppIntent::InstructionsClosed => vec![AppCommand::CloseInstructions],
        AppIntent::ClearAllRequested => {
            vec![AppCommand::CancelMode, AppCommand::ResetSubstrate]
        }
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
