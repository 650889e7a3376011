//! Layer-Inferenz: ungeordnete Punktauswahl → zeilenweise, rechteckige Form.

use super::GridPoint;
use anyhow::{bail, Result};

/// Mindestanzahl an Punkten für einen Layer.
pub const MIN_LAYER_NODES: usize = 2;

/// Meldung, wenn ein Layer mit zu wenigen Punkten abgeschlossen werden soll.
pub const LAYER_TOO_SMALL_MESSAGE: &str = "Please select at least 2 nodes to define a layer.";

/// Ein definierter Layer.
///
/// `nodes` ist zeilenweise abgeflacht (Zeilen nach absteigendem y, innerhalb
/// einer Zeile nach aufsteigendem x); `shape` enthält die Zeilenlängen.
/// Es gilt immer `shape.iter().sum() == nodes.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Länge jeder Zeile, von oben nach unten
    pub shape: Vec<usize>,
    /// Punkte in Zeilen-Reihenfolge passend zu `shape`
    pub nodes: Vec<GridPoint>,
}

impl Layer {
    /// Bildet einen Layer aus einer Auswahl.
    ///
    /// Schlägt fehl, wenn weniger als [`MIN_LAYER_NODES`] Punkte ausgewählt sind.
    pub fn from_selection(selection: &[GridPoint]) -> Result<Self> {
        if selection.len() < MIN_LAYER_NODES {
            bail!(LAYER_TOO_SMALL_MESSAGE);
        }

        let mut nodes = selection.to_vec();
        nodes.sort_by(GridPoint::cmp_row_major);

        let mut shape = Vec::new();
        let mut current_y = None;
        for node in &nodes {
            if current_y == Some(node.y) {
                if let Some(len) = shape.last_mut() {
                    *len += 1;
                }
            } else {
                shape.push(1);
                current_y = Some(node.y);
            }
        }

        Ok(Self { shape, nodes })
    }

    /// Rekonstruiert die Zeilen über die Partialsummen von `shape`.
    pub fn rows(&self) -> Vec<&[GridPoint]> {
        let mut rows = Vec::with_capacity(self.shape.len());
        let mut start = 0;
        for &len in &self.shape {
            let end = (start + len).min(self.nodes.len());
            rows.push(&self.nodes[start..end]);
            start = end;
        }
        rows
    }

    /// Anzahl der Punkte im Layer.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt `true` zurück, wenn der Punkt zu diesem Layer gehört.
    pub fn contains(&self, point: GridPoint) -> bool {
        self.nodes.contains(&point)
    }
}
