//! Seitenpanel mit den Listen des aktuellen Substrats.

use crate::app::{AppIntent, AppState};
use crate::core::{GridPoint, Layer};

/// Rendert das Substrat-Panel (Nodes, Layer, Verbindungen).
pub fn render_substrate_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let substrate = &state.substrate;

    egui::SidePanel::right("substrate_panel")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                point_list(ui, "Input Nodes", substrate.input_nodes().iter().copied());
                point_list(ui, "Hidden Nodes", substrate.hidden_nodes().into_iter());
                point_list(ui, "Output Nodes", substrate.output_nodes().iter().copied());

                ui.separator();
                ui.heading("Defined Layers");
                if substrate.layers().is_empty() {
                    ui.weak("keine");
                }
                for (index, layer) in substrate.layers().iter().enumerate() {
                    layer_entry(ui, index, layer);
                }

                ui.separator();
                ui.heading(format!("Connections ({})", substrate.connection_count()));
                for connection in substrate.connections_iter() {
                    ui.monospace(format!(
                        "({},{}) to ({},{})",
                        connection.from.x, connection.from.y, connection.to.x, connection.to.y
                    ));
                }

                ui.separator();
                if ui
                    .add_enabled(!substrate.is_empty(), egui::Button::new("Clear All"))
                    .clicked()
                {
                    events.push(AppIntent::ClearAllRequested);
                }
            });
        });

    events
}

fn point_list(ui: &mut egui::Ui, title: &str, points: impl Iterator<Item = GridPoint>) {
    ui.heading(title);
    let text = points
        .map(|p| format!("({},{})", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        ui.weak("keine");
    } else {
        ui.add(egui::Label::new(egui::RichText::new(text).monospace()).wrap());
    }
}

/// Ein Layer mit Form und den über die Form rekonstruierten Zeilen.
fn layer_entry(ui: &mut egui::Ui, index: usize, layer: &Layer) {
    ui.label(egui::RichText::new(format!("Layer {}: shape {:?}", index, layer.shape)).strong());
    for row in layer.rows() {
        let cells = row
            .iter()
            .map(|p| format!("({},{})", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        ui.monospace(format!("  {}", cells));
    }
}
