//! Top-Menü (File, Edit, Help).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Export Substrate as JSON... (Ctrl+E)").clicked() {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                ui.separator();

                if ui
                    .add_enabled(!state.substrate.is_empty(), egui::Button::new("Clear All"))
                    .clicked()
                {
                    events.push(AppIntent::ClearAllRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("Anleitung (F1)").clicked() {
                    events.push(AppIntent::InstructionsRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
