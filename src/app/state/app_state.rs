use crate::app::CommandLog;
use crate::core::Substrate;
use crate::shared::EditorOptions;

use super::{InteractionMode, UiState};

/// Hauptzustand der Anwendung (eine Editor-Sitzung)
pub struct AppState {
    /// Der aktuelle Substrat-Entwurf
    pub substrate: Substrate,
    /// Aktiver Interaktionsmodus inkl. Zwischenauswahl
    pub mode: InteractionMode,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Raster, Farben, Export)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            substrate: Substrate::new(),
            mode: InteractionMode::default(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Verbindungen zurück (für UI-Anzeige)
    pub fn connection_count(&self) -> usize {
        self.substrate.connection_count()
    }

    /// Gibt die Anzahl der definierten Layer zurück (für UI-Anzeige)
    pub fn layer_count(&self) -> usize {
        self.substrate.layers().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
