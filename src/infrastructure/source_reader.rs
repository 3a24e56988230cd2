// src/infrastructure/source_reader.rs
use crate::constants::NOTE_FILE_EXTENSION;
use crate::domain::ImportError;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::trace;

/// List the note files of an export directory, sorted by name.
///
/// Only regular files whose name ends in `.json` qualify; subdirectories and
/// attachments are skipped.
pub fn list_note_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read input directory {}", dir.display()))?
    {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        let is_note = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(NOTE_FILE_EXTENSION));

        if is_note && path.is_file() {
            files.push(path);
        } else {
            trace!(?path, "Skipping non-note entry");
        }
    }

    files.sort();
    Ok(files)
}

/// Read a note file; the handle is closed before returning, also on error.
pub fn read_note_file(path: impl AsRef<Path>) -> Result<String, ImportError> {
    let path = path.as_ref();
    let io_error = |source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut content = String::new();
    {
        let mut file = File::open(path).map_err(io_error)?;
        file.read_to_string(&mut content).map_err(io_error)?;
    }

    Ok(content)
}
