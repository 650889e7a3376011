//! Das zentrale Substrat-Modell: Node-Mengen, Verbindungen und Layer-Historie.

use super::dense::dense_candidates;
use super::{canonical_key, Connection, ConnectionKey, GridPoint, Layer};
use indexmap::{IndexMap, IndexSet};

/// Art eines explizit platzierten Nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Eingangs-Node
    Input,
    /// Ausgangs-Node
    Output,
}

/// Ergebnis eines Verbindungs-Toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionToggle {
    /// Neue Verbindung angehängt
    Added,
    /// Bestehende Verbindung (egal welche Richtung) entfernt
    Removed,
    /// Beide Endpunkte identisch, nichts geändert
    Ignored,
}

/// Vollständiger Substrat-Entwurf einer Editor-Sitzung.
///
/// Hidden-Nodes werden nicht gespeichert, sondern bei jedem Zugriff aus
/// Verbindungen und expliziten Node-Mengen abgeleitet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Substrate {
    /// Input-Nodes in Einfügereihenfolge
    input_nodes: IndexSet<GridPoint>,
    /// Output-Nodes in Einfügereihenfolge
    output_nodes: IndexSet<GridPoint>,
    /// Verbindungen, indexiert nach kanonischem Paar, in Einfügereihenfolge
    connections: IndexMap<ConnectionKey, Connection>,
    /// Abgeschlossene Layer (nur anhängen)
    layers: Vec<Layer>,
}

impl Substrate {
    /// Erstellt ein leeres Substrat
    pub fn new() -> Self {
        Self::default()
    }

    fn nodes_mut(&mut self, kind: NodeKind) -> &mut IndexSet<GridPoint> {
        match kind {
            NodeKind::Input => &mut self.input_nodes,
            NodeKind::Output => &mut self.output_nodes,
        }
    }

    /// Platziert oder entfernt einen Node der gegebenen Art.
    ///
    /// Gibt `true` zurück, wenn der Punkt danach in der Menge enthalten ist.
    pub fn toggle_node(&mut self, kind: NodeKind, point: GridPoint) -> bool {
        let nodes = self.nodes_mut(kind);
        if nodes.shift_remove(&point) {
            false
        } else {
            nodes.insert(point);
            true
        }
    }

    /// Alle Input-Nodes
    pub fn input_nodes(&self) -> &IndexSet<GridPoint> {
        &self.input_nodes
    }

    /// Alle Output-Nodes
    pub fn output_nodes(&self) -> &IndexSet<GridPoint> {
        &self.output_nodes
    }

    /// Gibt `true` zurück, wenn der Punkt Input- oder Output-Node ist.
    pub fn is_explicit_node(&self, point: GridPoint) -> bool {
        self.input_nodes.contains(&point) || self.output_nodes.contains(&point)
    }

    /// Schaltet eine ungerichtete Verbindung um.
    ///
    /// Existiert das Paar bereits (in beliebiger Richtung), wird es entfernt,
    /// sonst als `a → b` angehängt. Self-Loops werden ignoriert.
    pub fn toggle_connection(&mut self, a: GridPoint, b: GridPoint) -> ConnectionToggle {
        if a == b {
            return ConnectionToggle::Ignored;
        }

        let key = canonical_key(a, b);
        if self.connections.shift_remove(&key).is_some() {
            ConnectionToggle::Removed
        } else {
            self.connections.insert(key, Connection::new(a, b));
            ConnectionToggle::Added
        }
    }

    /// Prüft, ob zwischen `a` und `b` eine Verbindung besteht (richtungsunabhängig).
    pub fn has_connection(&self, a: GridPoint, b: GridPoint) -> bool {
        self.connections.contains_key(&canonical_key(a, b))
    }

    /// Verbindet die Auswahl dicht (Feed-Forward von niedrigem zu strikt höherem y).
    ///
    /// Bereits vorhandene Paare werden übersprungen. Gibt die Anzahl neu
    /// angehängter Verbindungen zurück.
    pub fn add_dense_connections(&mut self, selection: &[GridPoint]) -> usize {
        let mut added = 0;
        for candidate in dense_candidates(selection) {
            let key = candidate.key();
            if self.connections.contains_key(&key) {
                continue;
            }
            self.connections.insert(key, candidate);
            added += 1;
        }
        added
    }

    /// Iterator über alle Verbindungen in gespeicherter Reihenfolge
    pub fn connections_iter(&self) -> impl Iterator<Item = &Connection> + '_ {
        self.connections.values()
    }

    /// Anzahl der Verbindungen
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Abgeleitete Hidden-Nodes.
    ///
    /// Alle Endpunkte von Verbindungen, die weder Input- noch Output-Node sind,
    /// in Reihenfolge ihres ersten Auftretens (`from` vor `to`).
    pub fn hidden_nodes(&self) -> Vec<GridPoint> {
        let mut hidden = IndexSet::new();
        for connection in self.connections.values() {
            for endpoint in connection.endpoints() {
                if !self.is_explicit_node(endpoint) {
                    hidden.insert(endpoint);
                }
            }
        }
        hidden.into_iter().collect()
    }

    /// Gibt `true` zurück, wenn der Punkt aktuell als Hidden-Node gilt.
    pub fn is_hidden_node(&self, point: GridPoint) -> bool {
        !self.is_explicit_node(point) && self.connections.values().any(|c| c.touches(point))
    }

    /// Hängt einen abgeschlossenen Layer an die Historie an.
    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Alle Layer in Definitionsreihenfolge
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Gibt `true` zurück, wenn der Punkt zu irgendeinem Layer gehört.
    pub fn is_in_any_layer(&self, point: GridPoint) -> bool {
        self.layers.iter().any(|layer| layer.contains(point))
    }

    /// Gibt `true` zurück, wenn weder Nodes, Verbindungen noch Layer existieren.
    pub fn is_empty(&self) -> bool {
        self.input_nodes.is_empty()
            && self.output_nodes.is_empty()
            && self.connections.is_empty()
            && self.layers.is_empty()
    }
}
