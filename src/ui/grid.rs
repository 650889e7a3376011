//! Raster-Zeichenfläche: zeichnet die `GridScene` und meldet Zellklicks.

use crate::app::{AppIntent, CellFill, GridScene, NodeMarker};
use crate::shared::EditorOptions;

/// Radius der Input-/Output-Markierung relativ zur Zellgröße
const EXPLICIT_NODE_RADIUS: f32 = 0.3;
/// Radius der Hidden-Markierung relativ zur Zellgröße
const HIDDEN_NODE_RADIUS: f32 = 0.15;
/// Radius der Endpunkt-Punkte an Verbindungen
const CONNECTION_DOT_RADIUS: f32 = 3.0;

/// Zeichnet das Raster inklusive Achsbeschriftung und gibt Klick-Intents zurück.
///
/// Links neben jeder Zeile steht ihr y-Wert, unter jeder Spalte ihr x-Wert.
pub fn render_grid(ui: &mut egui::Ui, scene: &GridScene, options: &EditorOptions) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let geometry = scene.geometry;
    let gutter = geometry.cell_size;
    let side = geometry.side_length();

    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(side + gutter, side + gutter), egui::Sense::click());
    let origin = rect.min + egui::vec2(gutter, 0.0);
    let painter = ui.painter_at(rect);

    let to_screen = |local: [f32; 2]| origin + egui::vec2(local[0], local[1]);
    let cell_rect = |min: [f32; 2]| {
        egui::Rect::from_min_size(to_screen(min), egui::vec2(geometry.cell_size, geometry.cell_size))
    };

    // Zellen
    for cell in &scene.cells {
        let rect = cell_rect(geometry.cell_min(cell.point));
        let fill = match cell.fill {
            CellFill::Layer => options.cell_color_layer,
            CellFill::LayerSelection => options.cell_color_layer_selection,
            CellFill::DenseSelection => options.cell_color_dense_selection,
            CellFill::Even => options.cell_color_even,
            CellFill::Odd => options.cell_color_odd,
        };
        painter.rect_filled(rect, 0.0, super::to_color32(fill));
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(0.5, egui::Color32::from_gray(220)),
            egui::StrokeKind::Inside,
        );
    }

    // Verbindungen unter den Markierungen
    let connection_color = super::to_color32(options.connection_color);
    let stroke = egui::Stroke::new(options.connection_width_px, connection_color);
    for &(from, to) in &scene.connections {
        let a = to_screen(geometry.cell_center(from));
        let b = to_screen(geometry.cell_center(to));
        painter.line_segment([a, b], stroke);
        painter.circle_filled(a, CONNECTION_DOT_RADIUS, connection_color);
        painter.circle_filled(b, CONNECTION_DOT_RADIUS, connection_color);
    }

    // Node-Markierungen und Startpunkt-Rahmen
    for cell in &scene.cells {
        let center = to_screen(geometry.cell_center(cell.point));
        let marker = match cell.marker {
            Some(NodeMarker::Input) => Some((EXPLICIT_NODE_RADIUS, options.node_color_input)),
            Some(NodeMarker::Output) => Some((EXPLICIT_NODE_RADIUS, options.node_color_output)),
            Some(NodeMarker::Hidden) => Some((HIDDEN_NODE_RADIUS, options.node_color_hidden)),
            None => None,
        };
        if let Some((radius, color)) = marker {
            painter.circle_filled(center, geometry.cell_size * radius, super::to_color32(color));
        }

        if cell.selected {
            painter.rect_stroke(
                cell_rect(geometry.cell_min(cell.point)).shrink(1.0),
                2.0,
                egui::Stroke::new(2.0, super::to_color32(options.cell_color_selected_border)),
                egui::StrokeKind::Inside,
            );
        }
    }

    // Achsbeschriftung
    let font = egui::FontId::proportional((geometry.cell_size * 0.4).max(8.0));
    let label_color = ui.visuals().text_color();
    let half = geometry.half_extent;
    for value in -half..=half {
        let row = geometry.cell_center(crate::core::GridPoint::new(-half, value));
        painter.text(
            egui::pos2(rect.min.x + gutter * 0.5, origin.y + row[1]),
            egui::Align2::CENTER_CENTER,
            value.to_string(),
            font.clone(),
            label_color,
        );

        let column = geometry.cell_center(crate::core::GridPoint::new(value, -half));
        painter.text(
            egui::pos2(origin.x + column[0], origin.y + side + gutter * 0.5),
            egui::Align2::CENTER_CENTER,
            value.to_string(),
            font.clone(),
            label_color,
        );
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let local = pos - origin;
            match geometry.point_at([local.x, local.y]) {
                Some(point) => events.push(AppIntent::GridCellClicked { point }),
                None => log::debug!("Klick außerhalb des Rasters ignoriert"),
            }
        }
    }

    events
}
