//! HyperNEAT Substrate Designer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, GridScene, InteractionMode, ModeKind, UiState,
};
pub use core::{Connection, ConnectionToggle, GridPoint, Layer, NodeKind, Substrate};
pub use export::{build_document, save_substrate_file, write_substrate_json, SubstrateDocument};
pub use shared::EditorOptions;
