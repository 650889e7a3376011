//! JSON-Export für HyperNEAT-Substrate.
//!
//! Das Dokument ist das einzige bitgenaue Austauschformat des Editors:
//! Schlüssel `input_nodes`, `hidden_nodes`, `output_nodes`, `connections`, `layers`.
//! Ein Import ist nicht vorgesehen.

pub mod document;
pub mod writer;

pub use document::{build_document, ConnectionEntry, LayerEntry, PointEntry, SubstrateDocument};
pub use writer::{save_substrate_file, write_substrate_json, DEFAULT_EXPORT_FILE_NAME};
