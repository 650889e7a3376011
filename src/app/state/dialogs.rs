/// UI-bezogener Anwendungszustand (Dialoge, Meldungen)
#[derive(Debug, Default)]
pub struct UiState {
    /// Blockierende Validierungsmeldung (z.B. Layer mit zu wenigen Punkten)
    pub validation_message: Option<String>,
    /// Ob die Anleitung angezeigt wird
    pub show_instructions: bool,
    /// Ob der Export-Dateidialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Pfad des letzten erfolgreichen Exports
    pub last_export_path: Option<String>,
    /// Temporäre Statusnachricht (z.B. Anzahl neuer Dense-Verbindungen)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
