//! UI-Komponenten: Menü, Toolbar, Raster, Listen, Dialoge.

pub mod dialogs;
mod grid;
mod keyboard;
mod lists;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialogs).
/// Jede Komponente liest den State und gibt `AppIntent`s zurück, mutiert aber nichts.
pub mod menu;
pub mod options_dialog;
pub mod status;
pub mod toolbar;

pub use dialogs::{handle_export_dialog, show_instructions_popup, show_validation_dialog};
pub use grid::render_grid;
pub use keyboard::collect_keyboard_intents;
pub use lists::render_substrate_panel;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

/// Wandelt eine RGBA-Farbe aus den Optionen in eine egui-Farbe um.
pub(crate) fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}
