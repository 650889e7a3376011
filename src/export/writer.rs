//! Writer für das Substrat-JSON.

use super::build_document;
use crate::core::Substrate;
use anyhow::{Context, Result};
use std::path::Path;

/// Vorgeschlagener Dateiname beim Export.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "hn-substrate.json";

/// Serialisiert das Substrat als eingerücktes JSON (2 Leerzeichen).
///
/// Gleicher Zustand ergibt immer byte-identische Ausgabe.
pub fn write_substrate_json(substrate: &Substrate) -> Result<String> {
    let document = build_document(substrate);
    let json = serde_json::to_string_pretty(&document)
        .context("Substrat konnte nicht als JSON serialisiert werden")?;
    Ok(json)
}

/// Schreibt das Substrat-JSON in eine Datei.
pub fn save_substrate_file(substrate: &Substrate, path: &Path) -> Result<()> {
    let json = write_substrate_json(substrate)?;
    std::fs::write(path, json)
        .with_context(|| format!("Export nach {} fehlgeschlagen", path.display()))?;
    log::info!("Substrat exportiert nach: {}", path.display());
    Ok(())
}
