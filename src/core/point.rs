//! Ganzzahliger Rasterpunkt auf der (unbegrenzten) Substrat-Ebene.

use std::cmp::Ordering;
use std::fmt;

/// Ein Punkt auf dem Koordinatenraster.
///
/// Das Raster im UI ist ein endliches, um den Ursprung zentriertes Fenster,
/// der Koordinatenraum selbst ist nicht begrenzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPoint {
    /// X-Koordinate (wächst nach rechts)
    pub x: i32,
    /// Y-Koordinate (wächst nach oben)
    pub y: i32,
}

impl GridPoint {
    /// Erstellt einen neuen Rasterpunkt.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Reihenfolge für Layer-Zeilen: absteigend nach y, innerhalb einer Zeile aufsteigend nach x.
    pub fn cmp_row_major(&self, other: &Self) -> Ordering {
        other.y.cmp(&self.y).then(self.x.cmp(&other.x))
    }
}

/// Lexikographische Ordnung auf (x, y), dient als kanonische Sortierung für ungeordnete Paare.
impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.x, self.y).cmp(&(other.x, other.y))
    }
}

impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_order_sorts_descending_y_then_ascending_x() {
        let mut points = vec![
            GridPoint::new(1, 0),
            GridPoint::new(0, 2),
            GridPoint::new(-1, 0),
            GridPoint::new(1, 2),
        ];
        points.sort_by(GridPoint::cmp_row_major);

        assert_eq!(
            points,
            vec![
                GridPoint::new(0, 2),
                GridPoint::new(1, 2),
                GridPoint::new(-1, 0),
                GridPoint::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_display_matches_list_format() {
        assert_eq!(GridPoint::new(-3, 4).to_string(), "(-3, 4)");
    }
}
