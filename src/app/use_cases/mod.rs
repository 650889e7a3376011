//! Use-Cases: fachliche Abläufe, die den AppState mutieren.
//!
//! - `editing` — Rasterklicks (Nodes, manuelle Verbindungen, Auswahlen)
//! - `mode` — Moduswechsel und Abbruch
//! - `dense` — Dense-Auswahl in Verbindungen umsetzen
//! - `layer` — Layer-Auswahl abschließen
//! - `export` — JSON-Export

pub mod dense;
pub mod editing;
pub mod export;
pub mod layer;
pub mod mode;
