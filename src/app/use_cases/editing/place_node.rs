//! Use-Case: Input-/Output-Node an einem Rasterpunkt platzieren oder entfernen.

use crate::core::{GridPoint, NodeKind, Substrate};

/// Schaltet einen Node der gegebenen Art an `point` um.
pub fn toggle_node_at(substrate: &mut Substrate, kind: NodeKind, point: GridPoint) {
    if substrate.toggle_node(kind, point) {
        log::info!("{:?}-Node {} platziert", kind, point);
    } else {
        log::info!("{:?}-Node {} entfernt", kind, point);
    }
}
