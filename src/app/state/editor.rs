use crate::core::GridPoint;
use indexmap::IndexSet;

/// Umschaltbarer Interaktionsmodus (Toolbar-Buttons)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    /// Input-Nodes platzieren/entfernen
    PlacingInput,
    /// Output-Nodes platzieren/entfernen
    PlacingOutput,
    /// Punkte für einen neuen Layer auswählen
    DefiningLayer,
    /// Punkte für dichte Verbindungen auswählen
    DefiningDenseConnections,
}

/// Aktiver Interaktionsmodus inklusive seiner Zwischenauswahl.
///
/// Genau ein Modus ist aktiv. Der Startpunkt einer manuellen Verbindung
/// existiert nur im Leerlauf, jede Mehrfachauswahl nur in ihrem eigenen Modus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionMode {
    /// Kein Modus aktiv: Klicks erstellen/entfernen manuelle Verbindungen
    Idle {
        /// Erster Endpunkt der laufenden Verbindung
        selected_point: Option<GridPoint>,
    },
    /// Klicks schalten Input-Nodes um
    PlacingInput,
    /// Klicks schalten Output-Nodes um
    PlacingOutput,
    /// Klicks schalten Punkte in der Layer-Auswahl um
    DefiningLayer {
        /// Ausgewählte Punkte in Klick-Reihenfolge
        selection: IndexSet<GridPoint>,
    },
    /// Klicks schalten Punkte in der Dense-Auswahl um
    DefiningDenseConnections {
        /// Ausgewählte Punkte in Klick-Reihenfolge
        selection: IndexSet<GridPoint>,
    },
}

impl Default for InteractionMode {
    fn default() -> Self {
        Self::Idle {
            selected_point: None,
        }
    }
}

impl InteractionMode {
    /// Frischer Zustand beim Betreten eines Modus (leere Auswahl).
    pub fn enter(kind: ModeKind) -> Self {
        match kind {
            ModeKind::PlacingInput => Self::PlacingInput,
            ModeKind::PlacingOutput => Self::PlacingOutput,
            ModeKind::DefiningLayer => Self::DefiningLayer {
                selection: IndexSet::new(),
            },
            ModeKind::DefiningDenseConnections => Self::DefiningDenseConnections {
                selection: IndexSet::new(),
            },
        }
    }

    /// Art des aktiven Modus (`None` im Leerlauf).
    pub fn kind(&self) -> Option<ModeKind> {
        match self {
            Self::Idle { .. } => None,
            Self::PlacingInput => Some(ModeKind::PlacingInput),
            Self::PlacingOutput => Some(ModeKind::PlacingOutput),
            Self::DefiningLayer { .. } => Some(ModeKind::DefiningLayer),
            Self::DefiningDenseConnections { .. } => Some(ModeKind::DefiningDenseConnections),
        }
    }

    /// Gibt `true` zurück, wenn kein Modus aktiv ist.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }

    /// Startpunkt einer laufenden manuellen Verbindung
    pub fn selected_point(&self) -> Option<GridPoint> {
        match self {
            Self::Idle { selected_point } => *selected_point,
            _ => None,
        }
    }

    /// Laufende Mehrfachauswahl (Layer oder Dense)
    pub fn pending_selection(&self) -> Option<&IndexSet<GridPoint>> {
        match self {
            Self::DefiningLayer { selection } | Self::DefiningDenseConnections { selection } => {
                Some(selection)
            }
            _ => None,
        }
    }

    /// Anzahl der Punkte in der laufenden Mehrfachauswahl (0 ohne Auswahl).
    pub fn pending_count(&self) -> usize {
        self.pending_selection().map_or(0, IndexSet::len)
    }
}
