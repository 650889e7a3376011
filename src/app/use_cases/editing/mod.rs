//! Use-Case-Funktionen für Rasterklicks.
//!
//! Aufgeteilt nach Operation:
//! - `click` — Klick je nach Modus verteilen
//! - `place_node` — Input-/Output-Node umschalten
//! - `connect` — Manuelle Verbindung über zwei Klicks
//! - `pending_selection` — Mehrfachauswahl für Layer/Dense
//! - `session` — Entwurf zurücksetzen

mod click;
mod connect;
mod pending_selection;
mod place_node;
mod session;

pub use click::click_cell;
pub use connect::pick_connection_point;
pub use pending_selection::toggle_pending_point;
pub use place_node::toggle_node_at;
pub use session::reset_substrate;
