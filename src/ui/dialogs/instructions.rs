use crate::app::{AppIntent, UiState};

/// Zeigt die Bedienungsanleitung als Popup.
pub fn show_instructions_popup(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.show_instructions {
        return events;
    }

    egui::Window::new("How to Use the HyperNEAT Substrate Designer")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(520.0);

            step(
                ui,
                "1. Place Input/Output Nodes:",
                "Click the respective buttons and then click on the grid to place nodes.",
            );
            step(
                ui,
                "2. Create Individual Connections:",
                "Click sequentially on any two points on the grid to create a connection between them.",
            );
            step(
                ui,
                "3. Remove Individual Connections:",
                "Click sequentially on any two points on the grid to remove a connection between them.",
            );

            ui.label(egui::RichText::new("4. Create Dense Connections:").strong());
            ui.indent("dense_steps", |ui| {
                ui.label("• Click \"Create Dense Connections\"");
                ui.label("• Select nodes you want to connect densely (they will highlight)");
                ui.label("• Click \"Finish Dense Connections\" to connect all selected nodes");
            });

            ui.label(egui::RichText::new("5. Define Layers:").strong());
            ui.indent("layer_steps", |ui| {
                ui.label("• Click \"Define Layer\"");
                ui.label("• Select nodes you want in the layer (they will highlight)");
                ui.label("• Click \"Finish Layer\" (or press Enter) to define the layer");
            });

            step(
                ui,
                "6. Export:",
                "Click \"Export Substrate as JSON\" to save your design.",
            );

            ui.add_space(6.0);
            ui.weak("Shortcuts: 1-4 Modi, Enter abschließen, Esc abbrechen, Ctrl+E Export, F1 Hilfe");
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                if ui.button("Close").clicked() {
                    events.push(AppIntent::InstructionsClosed);
                }
            });
        });

    events
}

fn step(ui: &mut egui::Ui, title: &str, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(title).strong());
        ui.label(text);
    });
}
