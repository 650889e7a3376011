//! Toolbar mit den Modus-Buttons.

use crate::app::{AppIntent, AppState, ModeKind};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.mode.kind();
    let options = &state.options;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            mode_button(
                ui,
                "Place/Remove Input Nodes",
                ModeKind::PlacingInput,
                active,
                super::to_color32(options.node_color_input),
                &mut events,
            );
            mode_button(
                ui,
                "Place/Remove Output Nodes",
                ModeKind::PlacingOutput,
                active,
                super::to_color32(options.node_color_output),
                &mut events,
            );

            let dense_label = if active == Some(ModeKind::DefiningDenseConnections) {
                "Finish Dense Connections"
            } else {
                "Create Dense Connections"
            };
            mode_button(
                ui,
                dense_label,
                ModeKind::DefiningDenseConnections,
                active,
                super::to_color32(options.cell_color_dense_selection),
                &mut events,
            );

            let layer_label = if active == Some(ModeKind::DefiningLayer) {
                "Finish Layer"
            } else {
                "Define Layer"
            };
            mode_button(
                ui,
                layer_label,
                ModeKind::DefiningLayer,
                active,
                super::to_color32(options.cell_color_layer_selection),
                &mut events,
            );

            ui.separator();

            if ui
                .button("?")
                .on_hover_text("Anleitung (F1)")
                .clicked()
            {
                events.push(AppIntent::InstructionsRequested);
            }

            ui.separator();

            if ui
                .button("Export Substrate as JSON")
                .on_hover_text("Ctrl+E")
                .clicked()
            {
                events.push(AppIntent::ExportRequested);
            }

            // Laufende Auswahl anzeigen
            if let Some(selection) = state.mode.pending_selection() {
                ui.separator();
                ui.label(format!("Ausgewählt: {}", selection.len()));
            } else if let Some(start) = state.mode.selected_point() {
                ui.separator();
                ui.label(format!("Startpunkt: {} → Wähle zweiten Punkt", start));
            }
        });
    });

    events
}

/// Ein Modus-Button: farbig hinterlegt, aktiv mit Rahmen.
fn mode_button(
    ui: &mut egui::Ui,
    label: &str,
    mode: ModeKind,
    active: Option<ModeKind>,
    fill: egui::Color32,
    events: &mut Vec<AppIntent>,
) {
    let is_active = active == Some(mode);
    let mut button = egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE))
        .fill(fill)
        .selected(is_active);
    if is_active {
        button = button.stroke(egui::Stroke::new(2.0, egui::Color32::from_rgb(59, 130, 246)));
    }

    if ui.add(button).clicked() {
        events.push(AppIntent::ToggleModeRequested { mode });
    }
}
