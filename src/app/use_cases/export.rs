//! Use-Case: Substrat als JSON exportieren.

use crate::app::AppState;
use crate::export::save_substrate_file;
use std::path::Path;

/// Schreibt das aktuelle Substrat nach `path` und merkt sich den Pfad.
pub fn export_to_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    match save_substrate_file(&state.substrate, Path::new(path)) {
        Ok(()) => {
            state.ui.last_export_path = Some(path.to_string());
            state.ui.status_message = Some(format!("Exported to {}", path));
            Ok(())
        }
        Err(e) => {
            state.ui.status_message = Some(format!("Export failed: {:#}", e));
            Err(e)
        }
    }
}
