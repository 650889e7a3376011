use super::super::state::ModeKind;
use crate::core::GridPoint;
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Rasterzelle wurde angeklickt
    GridCellClicked { point: GridPoint },
    /// Toolbar-Button für einen Modus gedrückt (an/aus)
    ToggleModeRequested { mode: ModeKind },
    /// Laufende Auswahl explizit abschließen (Enter)
    FinishSelectionRequested,
    /// Aktuellen Modus verwerfen (Escape)
    CancelRequested,
    /// Export anfordern (zeigt Dateidialog)
    ExportRequested,
    /// Exportpfad wurde im Dialog ausgewählt
    ExportPathSelected { path: String },
    /// Validierungsmeldung bestätigt
    ValidationDismissed,
    /// Anleitung öffnen
    InstructionsRequested,
    /// Anleitung schließen
    InstructionsClosed,
    /// Gesamten Entwurf verwerfen und neu beginnen
    ClearAllRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
