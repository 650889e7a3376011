use super::super::state::ModeKind;
use crate::core::GridPoint;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Klick auf Rasterpunkt gemäß aktivem Modus verarbeiten
    ClickCell { point: GridPoint },
    /// Modus umschalten (Re-Toggle schließt ab)
    ToggleMode { mode: ModeKind },
    /// Layer-Auswahl abschließen (mit Validierung)
    FinishLayer,
    /// Modus ohne Abschluss verlassen
    CancelMode,
    /// Export-Dateidialog anfordern
    RequestExportDialog,
    /// Substrat als JSON in Datei schreiben
    ExportToFile { path: String },
    /// Validierungsmeldung schließen
    DismissValidation,
    /// Anleitung öffnen
    OpenInstructions,
    /// Anleitung schließen
    CloseInstructions,
    /// Substrat zurücksetzen (neue Sitzung)
    ResetSubstrate,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
