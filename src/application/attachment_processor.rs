// src/application/attachment_processor.rs
use crate::constants::{IMAGE_TAG, MIGRATION_ERROR_TAG};
use crate::domain::{Attachment, ContentBlock, ImportError};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, instrument, warn};

pub trait AssetStore {
    /// Whether an upload target is configured at all
    fn is_enabled(&self) -> bool;

    /// Upload the raw bytes of `file_name` and return the public URL
    fn upload(&mut self, file_name: &str, data: Vec<u8>) -> Result<String, ImportError>;
}

/// What processing a note's attachments contributes to its page.
///
/// `blocks` holds image blocks and annotation paragraphs interleaved in
/// attachment order; `extra_tags` holds each synthetic tag at most once.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AttachmentOutcome {
    pub blocks: Vec<ContentBlock>,
    pub extra_tags: Vec<String>,
}

impl AttachmentOutcome {
    fn annotate(&mut self, line: String) {
        self.blocks.push(ContentBlock::Paragraph(line));
    }

    fn tag_once(&mut self, tag: &str) {
        if !self.extra_tags.iter().any(|t| t == tag) {
            self.extra_tags.push(tag.to_string());
        }
    }
}

/// Resolve an attachment reference to a path under `root`.
///
/// Absolute references and references climbing out with `..` resolve to
/// nothing.
fn resolve_under(root: &Path, reference: &str) -> Option<PathBuf> {
    let relative = Path::new(reference);
    let contained = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
    contained.then(|| root.join(relative))
}

/// Upload every attachment of a note, in order.
///
/// A missing file, a reference outside `root` or a disabled store only
/// annotates the page. A failed upload aborts the whole note by returning
/// the error.
#[instrument(level = "debug", skip(attachments, store), fields(count = attachments.len()))]
pub fn process_attachments<S: AssetStore>(
    attachments: &[Attachment],
    root: &Path,
    store: &mut S,
) -> Result<AttachmentOutcome, ImportError> {
    let mut outcome = AttachmentOutcome::default();

    for attachment in attachments {
        let path = match resolve_under(root, &attachment.file_path) {
            Some(path) if path.is_file() => path,
            _ => {
                warn!(
                    reference = %attachment.file_path,
                    ?root,
                    "Attachment not found under export root"
                );
                outcome.annotate(format!(
                    "Migration Error: attachment '{}' was not found",
                    attachment.file_path
                ));
                outcome.tag_once(MIGRATION_ERROR_TAG);
                continue;
            }
        };

        if !store.is_enabled() {
            debug!(?path, "No image host configured, skipping attachment");
            outcome.annotate(format!(
                "Migration Note: attachment '{}' was not uploaded, no image host is configured",
                attachment.file_path
            ));
            continue;
        }

        let data = std::fs::read(&path).map_err(|source| ImportError::Io {
            path: path.clone(),
            source,
        })?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(attachment.file_path.as_str());

        let url = store.upload(file_name, data)?;
        debug!(%url, "Uploaded attachment");

        outcome.blocks.push(ContentBlock::Image { url });
        outcome.tag_once(IMAGE_TAG);
    }

    Ok(outcome)
}
