//! Core-Domänentypen: Rasterpunkte, Verbindungen, Layer und das Substrat-Modell.

pub mod connection;
pub mod dense;
pub mod layer;
pub mod point;
/// Das Substrat-Modell
///
/// - Substrate: Container für Input-/Output-Nodes, Verbindungen und Layer
/// - Hidden-Nodes: aus den Verbindungen abgeleitet, nie gespeichert
pub mod substrate;

pub use connection::{canonical_key, Connection, ConnectionKey};
pub use dense::dense_candidates;
pub use layer::{Layer, LAYER_TOO_SMALL_MESSAGE, MIN_LAYER_NODES};
pub use point::GridPoint;
pub use substrate::{ConnectionToggle, NodeKind, Substrate};
