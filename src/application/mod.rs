// src/application/mod.rs
pub mod attachment_processor;
pub mod importer;
pub mod payload_builder;

pub use attachment_processor::{AssetStore, AttachmentOutcome};
pub use importer::{ImportSummary, NoteImporter, PageRepository};
pub use payload_builder::build_payload;
