use crate::app::{AppIntent, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet den ausstehenden Export-Dialog und gibt AppIntents zurück.
///
/// Wird der Dialog abgebrochen, entsteht kein Intent und nichts wird geschrieben.
pub fn handle_export_dialog(ui_state: &mut UiState, default_name: &str) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.show_export_dialog {
        return events;
    }
    ui_state.show_export_dialog = false;

    let mut dialog = rfd::FileDialog::new()
        .add_filter("Substrate JSON", &["json"])
        .set_file_name(default_name);
    if let Some(dir) = ui_state
        .last_export_path
        .as_ref()
        .and_then(|p| std::path::Path::new(p).parent())
    {
        dialog = dialog.set_directory(dir);
    }

    match dialog.save_file() {
        Some(path) => events.push(AppIntent::ExportPathSelected {
            path: path_to_ui_string(&path),
        }),
        None => log::info!("Export abgebrochen"),
    }

    events
}
