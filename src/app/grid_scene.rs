//! Raster-Szene: reine Ableitung der Zellzustände aus dem AppState.
//!
//! Die UI zeichnet ausschließlich diese Daten; Pixel-Umrechnungen liegen hier,
//! damit Klick-Treffer und Zeichnen dieselbe Geometrie verwenden.

use super::{AppState, InteractionMode};
use crate::core::GridPoint;

/// Hintergrund einer Zelle (in absteigender Priorität)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFill {
    /// Punkt gehört zu einem abgeschlossenen Layer
    Layer,
    /// Punkt gehört zur laufenden Layer-Auswahl
    LayerSelection,
    /// Punkt gehört zur laufenden Dense-Auswahl
    DenseSelection,
    /// Schachbrett, (x + y) gerade
    Even,
    /// Schachbrett, (x + y) ungerade
    Odd,
}

/// Node-Markierung innerhalb einer Zelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeMarker {
    Input,
    Output,
    Hidden,
}

/// Eine sichtbare Rasterzelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub point: GridPoint,
    pub fill: CellFill,
    pub marker: Option<NodeMarker>,
    /// Startpunkt einer laufenden manuellen Verbindung
    pub selected: bool,
}

/// Geometrie des sichtbaren Rasterfensters (um den Ursprung zentriert)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// Sichtbar sind `-half_extent..=half_extent` in x und y
    pub half_extent: i32,
    /// Zellgröße in Pixeln
    pub cell_size: f32,
}

impl GridGeometry {
    /// Anzahl der Zellen pro Kante
    pub fn cells_per_side(&self) -> i32 {
        2 * self.half_extent + 1
    }

    /// Kantenlänge des Rasters in Pixeln
    pub fn side_length(&self) -> f32 {
        self.cells_per_side() as f32 * self.cell_size
    }

    /// Gibt `true` zurück, wenn der Punkt im sichtbaren Fenster liegt.
    pub fn contains(&self, point: GridPoint) -> bool {
        point.x.abs() <= self.half_extent && point.y.abs() <= self.half_extent
    }

    /// Linke obere Ecke der Zelle relativ zur Rasterecke (y wächst nach unten).
    pub fn cell_min(&self, point: GridPoint) -> [f32; 2] {
        [
            (point.x + self.half_extent) as f32 * self.cell_size,
            (self.half_extent - point.y) as f32 * self.cell_size,
        ]
    }

    /// Zellmittelpunkt relativ zur Rasterecke.
    pub fn cell_center(&self, point: GridPoint) -> [f32; 2] {
        let [x, y] = self.cell_min(point);
        [x + self.cell_size * 0.5, y + self.cell_size * 0.5]
    }

    /// Rasterpunkt unter einer Position relativ zur Rasterecke.
    pub fn point_at(&self, local: [f32; 2]) -> Option<GridPoint> {
        if local[0] < 0.0 || local[1] < 0.0 || self.cell_size <= 0.0 {
            return None;
        }
        let column = (local[0] / self.cell_size).floor() as i32;
        let row = (local[1] / self.cell_size).floor() as i32;
        let point = GridPoint::new(column - self.half_extent, self.half_extent - row);
        self.contains(point).then_some(point)
    }
}

/// Alles, was die UI für einen Frame des Rasters braucht
#[derive(Debug, Clone)]
pub struct GridScene {
    pub geometry: GridGeometry,
    /// Zellen zeilenweise von oben (größtes y) nach unten, links nach rechts
    pub cells: Vec<GridCell>,
    /// Verbindungen als Endpunktpaare in gespeicherter Reihenfolge
    pub connections: Vec<(GridPoint, GridPoint)>,
}

/// Baut die Szene aus dem aktuellen Zustand.
pub fn build(state: &AppState) -> GridScene {
    let geometry = GridGeometry {
        half_extent: state.options.grid_half_extent(),
        cell_size: state.options.cell_size_px,
    };
    let substrate = &state.substrate;
    let selected_point = state.mode.selected_point();

    let (layer_selection, dense_selection) = match &state.mode {
        InteractionMode::DefiningLayer { selection } => (Some(selection), None),
        InteractionMode::DefiningDenseConnections { selection } => (None, Some(selection)),
        _ => (None, None),
    };

    let half = geometry.half_extent;
    let mut cells = Vec::with_capacity((geometry.cells_per_side().pow(2)) as usize);
    for y in (-half..=half).rev() {
        for x in -half..=half {
            let point = GridPoint::new(x, y);

            let fill = if substrate.is_in_any_layer(point) {
                CellFill::Layer
            } else if layer_selection.is_some_and(|s| s.contains(&point)) {
                CellFill::LayerSelection
            } else if dense_selection.is_some_and(|s| s.contains(&point)) {
                CellFill::DenseSelection
            } else if (x + y) % 2 == 0 {
                CellFill::Even
            } else {
                CellFill::Odd
            };

            let marker = if substrate.input_nodes().contains(&point) {
                Some(NodeMarker::Input)
            } else if substrate.output_nodes().contains(&point) {
                Some(NodeMarker::Output)
            } else if substrate.is_hidden_node(point) {
                Some(NodeMarker::Hidden)
            } else {
                None
            };

            cells.push(GridCell {
                point,
                fill,
                marker,
                selected: selected_point == Some(point),
            });
        }
    }

    let connections = substrate
        .connections_iter()
        .map(|c| (c.from, c.to))
        .collect();

    GridScene {
        geometry,
        cells,
        connections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ModeKind;
    use crate::core::NodeKind;
    use approx::assert_relative_eq;

    fn small_state() -> AppState {
        let mut state = AppState::new();
        state.options.grid_size = 5;
        state
    }

    fn cell(scene: &GridScene, x: i32, y: i32) -> GridCell {
        *scene
            .cells
            .iter()
            .find(|c| c.point == GridPoint::new(x, y))
            .expect("Zelle erwartet")
    }

    #[test]
    fn test_cells_run_top_left_to_bottom_right() {
        let scene = build(&small_state());
        assert_eq!(scene.cells.len(), 25);
        assert_eq!(scene.cells[0].point, GridPoint::new(-2, 2));
        assert_eq!(scene.cells[24].point, GridPoint::new(2, -2));
    }

    #[test]
    fn test_markers_follow_classification() {
        let mut state = small_state();
        state.substrate.toggle_node(NodeKind::Input, GridPoint::new(0, -1));
        state.substrate.toggle_node(NodeKind::Output, GridPoint::new(0, 1));
        state
            .substrate
            .toggle_connection(GridPoint::new(0, -1), GridPoint::new(1, 0));

        let scene = build(&state);
        assert_eq!(cell(&scene, 0, -1).marker, Some(NodeMarker::Input));
        assert_eq!(cell(&scene, 0, 1).marker, Some(NodeMarker::Output));
        assert_eq!(cell(&scene, 1, 0).marker, Some(NodeMarker::Hidden));
        assert_eq!(cell(&scene, 2, 2).marker, None);
        assert_eq!(scene.connections.len(), 1);
    }

    #[test]
    fn test_connected_input_keeps_input_marker() {
        let mut state = small_state();
        state.substrate.toggle_node(NodeKind::Input, GridPoint::new(-1, -1));
        state
            .substrate
            .toggle_connection(GridPoint::new(-1, -1), GridPoint::new(1, 1));

        let scene = build(&state);
        assert_eq!(cell(&scene, -1, -1).marker, Some(NodeMarker::Input));
        assert_eq!(cell(&scene, 1, 1).marker, Some(NodeMarker::Hidden));

        // Ohne Verbindung verschwindet die Hidden-Markierung
        state
            .substrate
            .toggle_connection(GridPoint::new(1, 1), GridPoint::new(-1, -1));
        let scene = build(&state);
        assert_eq!(cell(&scene, 1, 1).marker, None);
    }

    #[test]
    fn test_pending_selection_overrides_checkerboard() {
        let mut state = small_state();
        state.mode = InteractionMode::enter(ModeKind::DefiningDenseConnections);
        if let InteractionMode::DefiningDenseConnections { selection } = &mut state.mode {
            selection.insert(GridPoint::new(1, 1));
        }

        let scene = build(&state);
        assert_eq!(cell(&scene, 1, 1).fill, CellFill::DenseSelection);
        assert_eq!(cell(&scene, 0, 0).fill, CellFill::Even);
        assert_eq!(cell(&scene, 1, 0).fill, CellFill::Odd);
    }

    #[test]
    fn test_committed_layer_wins_over_pending_selection() {
        let mut state = small_state();
        state.substrate.push_layer(
            crate::core::Layer::from_selection(&[GridPoint::new(0, 0), GridPoint::new(1, 0)])
                .expect("Layer erwartet"),
        );
        state.mode = InteractionMode::enter(ModeKind::DefiningLayer);
        if let InteractionMode::DefiningLayer { selection } = &mut state.mode {
            selection.insert(GridPoint::new(0, 0));
            selection.insert(GridPoint::new(-1, -1));
        }

        let scene = build(&state);
        assert_eq!(cell(&scene, 0, 0).fill, CellFill::Layer);
        assert_eq!(cell(&scene, -1, -1).fill, CellFill::LayerSelection);
    }

    #[test]
    fn test_geometry_maps_points_and_back() {
        let geometry = GridGeometry {
            half_extent: 12,
            cell_size: 32.0,
        };
        let center = geometry.cell_center(GridPoint::new(1, 1));
        assert_relative_eq!(center[0], 13.5 * 32.0);
        assert_relative_eq!(center[1], 11.5 * 32.0);

        assert_eq!(geometry.point_at(center), Some(GridPoint::new(1, 1)));
        assert_eq!(geometry.point_at([0.0, 0.0]), Some(GridPoint::new(-12, 12)));
        assert_eq!(geometry.point_at([-1.0, 5.0]), None);
        assert_eq!(geometry.point_at([geometry.side_length() + 1.0, 5.0]), None);
    }
}
