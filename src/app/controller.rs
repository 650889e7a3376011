//! Application Controller für zentrale Event-Verarbeitung.

use super::grid_scene::{self, GridScene};
use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::ClickCell { point } => handlers::editing::click_cell(state, point),

            // === Modi ===
            AppCommand::ToggleMode { mode } => handlers::mode::toggle(state, mode),
            AppCommand::FinishLayer => handlers::mode::finish_layer(state),
            AppCommand::CancelMode => handlers::mode::cancel(state),

            // === Export ===
            AppCommand::RequestExportDialog => handlers::export::request_dialog(state),
            AppCommand::ExportToFile { path } => handlers::export::export_to_file(state, &path)?,

            // === Sitzung ===
            AppCommand::ResetSubstrate => handlers::editing::reset_substrate(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),

            // === Dialoge & Optionen ===
            AppCommand::DismissValidation => handlers::dialog::dismiss_validation(state),
            AppCommand::OpenInstructions => handlers::dialog::open_instructions(state),
            AppCommand::CloseInstructions => handlers::dialog::close_instructions(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options)?,
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Raster-Szene für den aktuellen Frame.
    pub fn build_grid_scene(&self, state: &AppState) -> GridScene {
        grid_scene::build(state)
    }
}
