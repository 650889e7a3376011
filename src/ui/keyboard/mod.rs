//! Keyboard-Shortcuts für den Editor.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, ModeKind};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange eine Validierungsmeldung offen ist, bestätigen Enter und Escape
/// nur diese Meldung. Hat ein Textfeld den Fokus, gehören alle Tasten ihm.
///
/// Muss vor dem Zeichnen der Widgets aufgerufen werden: ein einzeiliges
/// Textfeld gibt den Fokus bei Enter noch im selben Frame ab. Escape entzieht
/// den Fokus schon zu Frame-Beginn, deshalb zählt auch `text_focus_last_frame`.
pub fn collect_keyboard_intents(
    ctx: &egui::Context,
    validation_open: bool,
    text_focus_last_frame: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if text_focus_last_frame || ctx.wants_keyboard_input() {
        return events;
    }

    let (modifiers, key_enter_pressed, key_escape_pressed, key_e_pressed, key_f1_pressed) =
        ctx.input(|i| {
            (
                i.modifiers,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::E),
                i.key_pressed(egui::Key::F1),
            )
        });

    if validation_open {
        if key_enter_pressed || key_escape_pressed {
            events.push(AppIntent::ValidationDismissed);
        }
        return events;
    }

    if key_escape_pressed {
        events.push(AppIntent::CancelRequested);
    }

    if key_enter_pressed {
        events.push(AppIntent::FinishSelectionRequested);
    }

    if modifiers.command && key_e_pressed {
        events.push(AppIntent::ExportRequested);
    }

    if key_f1_pressed {
        events.push(AppIntent::InstructionsRequested);
    }

    // Modus-Wechsel (1-4, Reihenfolge wie in der Toolbar)
    let mode_keys = [
        (egui::Key::Num1, ModeKind::PlacingInput),
        (egui::Key::Num2, ModeKind::PlacingOutput),
        (egui::Key::Num3, ModeKind::DefiningDenseConnections),
        (egui::Key::Num4, ModeKind::DefiningLayer),
    ];
    if !modifiers.any() {
        for (key, mode) in mode_keys {
            if ctx.input(|i| i.key_pressed(key)) {
                events.push(AppIntent::ToggleModeRequested { mode });
            }
        }
    }

    events
}
