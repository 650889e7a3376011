//! Zentrale Konfiguration für den HyperNEAT Substrate Designer.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::export::DEFAULT_EXPORT_FILE_NAME;
use serde::{Deserialize, Serialize};

// ── Raster ──────────────────────────────────────────────────────────

/// Kantenlänge des sichtbaren Rasters in Zellen (ungerade, damit der Ursprung mittig liegt).
pub const GRID_SIZE: u32 = 25;
/// Kleinste sinnvolle Rastergröße.
pub const GRID_SIZE_MIN: u32 = 3;
/// Größte Rastergröße (darüber wird das Zeichnen unübersichtlich).
pub const GRID_SIZE_MAX: u32 = 101;
/// Zellgröße in Pixeln.
pub const CELL_SIZE_PX: f32 = 32.0;

// ── Zellfarben ─────────────────────────────────────────────────────

/// Schachbrett-Farbe für gerade (x + y).
pub const CELL_COLOR_EVEN: [f32; 4] = [0.976, 0.98, 0.984, 1.0];
/// Schachbrett-Farbe für ungerade (x + y).
pub const CELL_COLOR_ODD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Zellen, die zu einem abgeschlossenen Layer gehören (helles Gelb).
pub const CELL_COLOR_LAYER: [f32; 4] = [0.996, 0.941, 0.541, 1.0];
/// Zellen in der laufenden Layer-Auswahl (kräftiges Gelb).
pub const CELL_COLOR_LAYER_SELECTION: [f32; 4] = [0.98, 0.8, 0.082, 1.0];
/// Zellen in der laufenden Dense-Auswahl (Lila).
pub const CELL_COLOR_DENSE_SELECTION: [f32; 4] = [0.753, 0.518, 0.988, 1.0];
/// Rahmenfarbe des gewählten Startpunkts einer manuellen Verbindung (Blau).
pub const CELL_COLOR_SELECTED_BORDER: [f32; 4] = [0.231, 0.51, 0.965, 1.0];

// ── Nodes & Verbindungen ───────────────────────────────────────────

/// Farbe der Input-Nodes (Grün).
pub const NODE_COLOR_INPUT: [f32; 4] = [0.133, 0.773, 0.369, 1.0];
/// Farbe der Output-Nodes (Rot).
pub const NODE_COLOR_OUTPUT: [f32; 4] = [0.937, 0.267, 0.267, 1.0];
/// Farbe der Hidden-Nodes (Schwarz).
pub const NODE_COLOR_HIDDEN: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Verbindungslinien (Schwarz).
pub const CONNECTION_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Linienstärke der Verbindungen in Pixeln.
pub const CONNECTION_WIDTH_PX: f32 = 2.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `hn_substrate_designer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Kantenlänge des Rasters in Zellen
    pub grid_size: u32,
    /// Zellgröße in Pixeln
    pub cell_size_px: f32,
    /// Schachbrett-Farbe (gerade)
    pub cell_color_even: [f32; 4],
    /// Schachbrett-Farbe (ungerade)
    pub cell_color_odd: [f32; 4],
    /// Farbe für Zellen abgeschlossener Layer
    pub cell_color_layer: [f32; 4],
    /// Farbe für Zellen der laufenden Layer-Auswahl
    pub cell_color_layer_selection: [f32; 4],
    /// Farbe für Zellen der laufenden Dense-Auswahl
    pub cell_color_dense_selection: [f32; 4],
    /// Rahmenfarbe des gewählten Startpunkts
    pub cell_color_selected_border: [f32; 4],

    // ── Nodes ───────────────────────────────────────────────────
    /// Farbe der Input-Nodes
    pub node_color_input: [f32; 4],
    /// Farbe der Output-Nodes
    pub node_color_output: [f32; 4],
    /// Farbe der Hidden-Nodes
    pub node_color_hidden: [f32; 4],

    // ── Connections ─────────────────────────────────────────────
    /// Farbe der Verbindungen
    pub connection_color: [f32; 4],
    /// Linienstärke in Pixeln
    pub connection_width_px: f32,

    // ── Export ──────────────────────────────────────────────────
    /// Vorgeschlagener Dateiname im Export-Dialog
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
    /// Anleitung beim Start anzeigen
    #[serde(default)]
    pub show_instructions_on_start: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            cell_size_px: CELL_SIZE_PX,
            cell_color_even: CELL_COLOR_EVEN,
            cell_color_odd: CELL_COLOR_ODD,
            cell_color_layer: CELL_COLOR_LAYER,
            cell_color_layer_selection: CELL_COLOR_LAYER_SELECTION,
            cell_color_dense_selection: CELL_COLOR_DENSE_SELECTION,
            cell_color_selected_border: CELL_COLOR_SELECTED_BORDER,

            node_color_input: NODE_COLOR_INPUT,
            node_color_output: NODE_COLOR_OUTPUT,
            node_color_hidden: NODE_COLOR_HIDDEN,

            connection_color: CONNECTION_COLOR,
            connection_width_px: CONNECTION_WIDTH_PX,

            export_file_name: default_export_file_name(),
            show_instructions_on_start: false,
        }
    }
}

/// Serde-Default für `export_file_name` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.normalized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("hn_substrate_designer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("hn_substrate_designer.toml")
    }

    /// Klemmt die Rastergröße auf einen ungeraden Wert im erlaubten Bereich.
    pub fn normalized(mut self) -> Self {
        let clamped = self.grid_size.clamp(GRID_SIZE_MIN, GRID_SIZE_MAX);
        let odd = if clamped % 2 == 0 { clamped + 1 } else { clamped };
        if odd != self.grid_size {
            log::warn!(
                "Rastergröße {} ungültig, verwende {}",
                self.grid_size,
                odd
            );
            self.grid_size = odd;
        }
        if !self.cell_size_px.is_finite() || self.cell_size_px <= 0.0 {
            log::warn!(
                "Zellgröße {} ungültig, verwende {}",
                self.cell_size_px,
                CELL_SIZE_PX
            );
            self.cell_size_px = CELL_SIZE_PX;
        }
        if !self.connection_width_px.is_finite() || self.connection_width_px <= 0.0 {
            self.connection_width_px = CONNECTION_WIDTH_PX;
        }
        self
    }

    /// Halbe Rasterbreite: sichtbar sind Koordinaten `-half..=half` in beiden Achsen.
    pub fn grid_half_extent(&self) -> i32 {
        (self.grid_size / 2) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_grid_size_is_made_odd() {
        let opts = EditorOptions {
            grid_size: 24,
            ..EditorOptions::default()
        }
        .normalized();
        assert_eq!(opts.grid_size, 25);
        assert_eq!(opts.grid_half_extent(), 12);
    }

    #[test]
    fn test_grid_size_is_clamped() {
        let small = EditorOptions {
            grid_size: 0,
            ..EditorOptions::default()
        }
        .normalized();
        assert_eq!(small.grid_size, GRID_SIZE_MIN);

        let large = EditorOptions {
            grid_size: 1000,
            ..EditorOptions::default()
        }
        .normalized();
        assert_eq!(large.grid_size, GRID_SIZE_MAX);
    }

    #[test]
    fn test_non_finite_sizes_fall_back_to_defaults() {
        let opts = EditorOptions {
            cell_size_px: f32::NAN,
            connection_width_px: f32::INFINITY,
            ..EditorOptions::default()
        }
        .normalized();
        assert_eq!(opts.cell_size_px, CELL_SIZE_PX);
        assert_eq!(opts.connection_width_px, CONNECTION_WIDTH_PX);
    }

    #[test]
    fn test_nan_cell_size_from_file_is_replaced() {
        let path = std::env::temp_dir().join(format!(
            "hn_substrate_designer_nan_{}.toml",
            std::process::id()
        ));
        let mut content =
            toml::to_string_pretty(&EditorOptions::default()).expect("Serialisierung erwartet");
        content = content
            .lines()
            .map(|line| {
                if line.starts_with("cell_size_px") {
                    "cell_size_px = nan".to_string()
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        std::fs::write(&path, content).expect("Schreiben erwartet");

        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert!(loaded.cell_size_px.is_finite());
        assert_eq!(loaded.cell_size_px, CELL_SIZE_PX);
    }

    #[test]
    fn test_save_and_load_keeps_values() {
        let path = std::env::temp_dir().join(format!(
            "hn_substrate_designer_options_{}.toml",
            std::process::id()
        ));
        let opts = EditorOptions {
            grid_size: 11,
            export_file_name: "xor-substrate.json".to_string(),
            ..EditorOptions::default()
        };

        opts.save_to_file(&path).expect("Speichern erwartet");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "hn_substrate_designer_broken_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "grid_size = \"gross\"").expect("Schreiben erwartet");

        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, EditorOptions::default());
    }
}
