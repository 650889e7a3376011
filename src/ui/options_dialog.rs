//! Optionen-Dialog für Raster, Farben und Export.

use crate::app::{AppIntent, AppState};
use crate::shared::options::{GRID_SIZE_MAX, GRID_SIZE_MIN};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Raster ──────────────────────────────────────
                    ui.collapsing("Raster", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Größe (Zellen):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.grid_size)
                                        .range(GRID_SIZE_MIN..=GRID_SIZE_MAX)
                                        .speed(2.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zellgröße (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.cell_size_px)
                                        .range(12.0..=64.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Schachbrett hell:", &mut opts.cell_color_even);
                        changed |= color_edit(ui, "Schachbrett dunkel:", &mut opts.cell_color_odd);
                        changed |= color_edit(ui, "Layer:", &mut opts.cell_color_layer);
                        changed |= color_edit(
                            ui,
                            "Layer-Auswahl:",
                            &mut opts.cell_color_layer_selection,
                        );
                        changed |= color_edit(
                            ui,
                            "Dense-Auswahl:",
                            &mut opts.cell_color_dense_selection,
                        );
                        changed |= color_edit(
                            ui,
                            "Startpunkt-Rahmen:",
                            &mut opts.cell_color_selected_border,
                        );
                    });

                    // ── Nodes ───────────────────────────────────────
                    ui.collapsing("Nodes", |ui| {
                        changed |= color_edit(ui, "Input:", &mut opts.node_color_input);
                        changed |= color_edit(ui, "Output:", &mut opts.node_color_output);
                        changed |= color_edit(ui, "Hidden:", &mut opts.node_color_hidden);
                    });

                    // ── Connections ──────────────────────────────────
                    ui.collapsing("Verbindungen", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Linienstärke (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.connection_width_px)
                                        .range(0.5..=8.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Farbe:", &mut opts.connection_color);
                    });

                    // ── Export ──────────────────────────────────────
                    ui.collapsing("Export", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Dateiname:");
                            changed |= ui
                                .text_edit_singleline(&mut opts.export_file_name)
                                .changed();
                        });
                        changed |= ui
                            .checkbox(
                                &mut opts.show_instructions_on_start,
                                "Anleitung beim Start anzeigen",
                            )
                            .changed();
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = super::to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
