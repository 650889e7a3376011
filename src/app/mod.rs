//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod grid_scene;
pub mod handlers;
mod intent_mapping;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand einer Editor-Sitzung (Substrat, Modus, Dialoge).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use grid_scene::{CellFill, GridCell, GridGeometry, GridScene, NodeMarker};
pub use state::{AppState, InteractionMode, ModeKind, UiState};
