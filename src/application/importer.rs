// src/application/importer.rs
use crate::application::attachment_processor::{process_attachments, AssetStore};
use crate::application::payload_builder::build_payload;
use crate::domain::{ImportError, KeepNote, PagePayload};
use crate::infrastructure::source_reader;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

pub trait PageRepository {
    /// Create one page; any non-success answer is an error
    fn create_page(&mut self, payload: &PagePayload) -> Result<(), ImportError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub success: usize,
    pub failed: usize,
}

/// Main use case: turn every note file of an export directory into a page
pub struct NoteImporter<P: PageRepository, S: AssetStore> {
    input_dir: PathBuf,
    pages: P,
    assets: S,
}

impl<P: PageRepository, S: AssetStore> NoteImporter<P, S> {
    pub fn new(input_dir: impl AsRef<Path>, pages: P, assets: S) -> Self {
        Self {
            input_dir: input_dir.as_ref().to_path_buf(),
            pages,
            assets,
        }
    }

    #[cfg(test)]
    fn pages(&self) -> &P {
        &self.pages
    }

    #[cfg(test)]
    fn assets(&self) -> &S {
        &self.assets
    }

    /// Import every `.json` file of the input directory.
    ///
    /// Per-file failures are counted and reported; only an unreadable input
    /// directory stops the run.
    pub fn import_all(&mut self) -> Result<ImportSummary> {
        let files = source_reader::list_note_files(&self.input_dir)?;
        info!(count = files.len(), dir = ?self.input_dir, "Importing notes");

        let mut summary = ImportSummary::default();
        for path in files {
            let file = display_name(&path);
            match self.import_file(&path) {
                Ok(title) => {
                    println!("Importing: {}... ✅", title);
                    summary.success += 1;
                }
                Err(e) => {
                    println!("Failed: {}: {}", file, e);
                    debug!(file = %file, error = ?e, "Note import failed");
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Read, parse and import a single note file, returning the note title
    pub fn import_file(&mut self, path: &Path) -> Result<String, ImportError> {
        let file = display_name(path);
        let json = source_reader::read_note_file(path)?;
        let note = KeepNote::from_json(&file, &json)?;
        self.import_note(&file, &note)
    }

    /// Validate and submit one parsed note
    #[instrument(level = "debug", skip(self, note))]
    pub fn import_note(&mut self, file: &str, note: &KeepNote) -> Result<String, ImportError> {
        let title = note.validate(file)?;

        let attachments = process_attachments(
            note.attachments.as_deref().unwrap_or_default(),
            &self.input_dir,
            &mut self.assets,
        )?;

        let payload = build_payload(title, note, attachments);
        debug!(blocks = payload.children.len(), tags = ?payload.tags, "Built page payload");

        self.pages.create_page(&payload)?;
        Ok(title.to_string())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
