//! Serialisierbare Dokument-Struktur des Substrat-Exports.

use crate::core::{Connection, GridPoint, Layer, Substrate};
use serde::Serialize;

/// Ein Punkt als `{ "x": .., "y": .. }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointEntry {
    pub x: i32,
    pub y: i32,
}

impl From<GridPoint> for PointEntry {
    fn from(point: GridPoint) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// Eine Verbindung als `{ "from": {..}, "to": {..} }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectionEntry {
    pub from: PointEntry,
    pub to: PointEntry,
}

impl From<&Connection> for ConnectionEntry {
    fn from(connection: &Connection) -> Self {
        Self {
            from: connection.from.into(),
            to: connection.to.into(),
        }
    }
}

/// Ein Layer mit positionsbasierter ID (0-basiert, beim Export vergeben)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerEntry {
    pub id: usize,
    pub shape: Vec<usize>,
    pub nodes: Vec<PointEntry>,
}

impl LayerEntry {
    fn from_layer(id: usize, layer: &Layer) -> Self {
        Self {
            id,
            shape: layer.shape.clone(),
            nodes: layer.nodes.iter().copied().map(PointEntry::from).collect(),
        }
    }
}

/// Vollständiges Export-Dokument.
///
/// Die Feldreihenfolge bestimmt die Schlüsselreihenfolge im JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstrateDocument {
    pub input_nodes: Vec<PointEntry>,
    pub hidden_nodes: Vec<PointEntry>,
    pub output_nodes: Vec<PointEntry>,
    pub connections: Vec<ConnectionEntry>,
    pub layers: Vec<LayerEntry>,
}

/// Baut das Export-Dokument aus dem aktuellen Substrat (rein, deterministisch).
pub fn build_document(substrate: &Substrate) -> SubstrateDocument {
    SubstrateDocument {
        input_nodes: substrate
            .input_nodes()
            .iter()
            .copied()
            .map(PointEntry::from)
            .collect(),
        hidden_nodes: substrate
            .hidden_nodes()
            .into_iter()
            .map(PointEntry::from)
            .collect(),
        output_nodes: substrate
            .output_nodes()
            .iter()
            .copied()
            .map(PointEntry::from)
            .collect(),
        connections: substrate
            .connections_iter()
            .map(ConnectionEntry::from)
            .collect(),
        layers: substrate
            .layers()
            .iter()
            .enumerate()
            .map(|(id, layer)| LayerEntry::from_layer(id, layer))
            .collect(),
    }
}
