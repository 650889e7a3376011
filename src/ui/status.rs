//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, ModeKind};

/// Anzeigename eines Modus
fn mode_name(mode: Option<ModeKind>) -> &'static str {
    match mode {
        None => "Verbinden",
        Some(ModeKind::PlacingInput) => "Input-Nodes",
        Some(ModeKind::PlacingOutput) => "Output-Nodes",
        Some(ModeKind::DefiningLayer) => "Layer definieren",
        Some(ModeKind::DefiningDenseConnections) => "Dense-Verbindungen",
    }
}

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    let substrate = &state.substrate;

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Inputs: {} | Hidden: {} | Outputs: {} | Connections: {} | Layers: {}",
                substrate.input_nodes().len(),
                substrate.hidden_nodes().len(),
                substrate.output_nodes().len(),
                state.connection_count(),
                state.layer_count()
            ));

            ui.separator();

            ui.label(format!("Modus: {}", mode_name(state.mode.kind())));

            // Statusnachricht (z.B. Export-Ergebnis)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(msg.as_str());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Raster: {0}×{0}", state.options.grid_size));
            });
        });
    });
}
