use crate::app::{AppIntent, UiState};

/// Zeigt eine offene Validierungsmeldung mit OK-Button.
pub fn show_validation_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = ui_state.validation_message.as_deref() else {
        return events;
    };

    egui::Window::new("Hinweis")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(format!("⚠ {}", message)).color(egui::Color32::YELLOW));
                ui.add_space(12.0);
                if ui.button("OK").clicked() {
                    events.push(AppIntent::ValidationDismissed);
                }
            });
        });

    events
}
