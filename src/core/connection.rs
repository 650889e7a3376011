//! Repräsentiert eine ungerichtete Verbindung zwischen zwei Rasterpunkten.

use super::GridPoint;

/// Kanonischer Schlüssel eines ungeordneten Punktpaares (kleinerer Punkt zuerst).
pub type ConnectionKey = (GridPoint, GridPoint);

/// Eine Verbindung zwischen zwei Rasterpunkten.
///
/// Gespeichert wird die Klick-Reihenfolge (`from` → `to`), Gleichheit und
/// Toggle-Logik behandeln `(a, b)` und `(b, a)` jedoch als dieselbe Verbindung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    /// Erster Endpunkt (so wie er exportiert wird)
    pub from: GridPoint,
    /// Zweiter Endpunkt
    pub to: GridPoint,
}

impl Connection {
    /// Erstellt eine neue Verbindung
    pub const fn new(from: GridPoint, to: GridPoint) -> Self {
        Self { from, to }
    }

    /// Kanonischer Schlüssel für Duplikat-Prüfung unabhängig von der Richtung.
    pub fn key(&self) -> ConnectionKey {
        canonical_key(self.from, self.to)
    }

    /// Gibt `true` zurück, wenn `point` einer der beiden Endpunkte ist.
    pub fn touches(&self, point: GridPoint) -> bool {
        self.from == point || self.to == point
    }

    /// Beide Endpunkte in gespeicherter Reihenfolge.
    pub fn endpoints(&self) -> [GridPoint; 2] {
        [self.from, self.to]
    }
}

/// Normalisiert ein ungeordnetes Paar auf (min, max).
pub fn canonical_key(a: GridPoint, b: GridPoint) -> ConnectionKey {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
