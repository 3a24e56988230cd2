use anyhow::{Context, Result};
use keep2notion::infrastructure::config::NotionConfig;
use keep2notion::infrastructure::ImportSettings;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary Takeout Keep export directory
#[allow(dead_code)]
pub struct KeepExport {
    _temp_dir: TempDir,
    pub dir: PathBuf,
}

#[allow(dead_code)]
impl KeepExport {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let dir = temp_dir.path().join("Keep");
        std::fs::create_dir(&dir).context("Failed to create export directory")?;

        Ok(Self {
            _temp_dir: temp_dir,
            dir,
        })
    }

    /// Write a note file verbatim
    pub fn with_note(self, name: &str, json: &str) -> Result<Self> {
        std::fs::write(self.dir.join(name), json)
            .with_context(|| format!("Failed to write note {}", name))?;
        Ok(self)
    }

    /// Write an attachment or any other non-note file
    pub fn with_file(self, name: &str, data: &[u8]) -> Result<Self> {
        std::fs::write(self.dir.join(name), data)
            .with_context(|| format!("Failed to write file {}", name))?;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Settings pointing both remote APIs at a mock server
    pub fn settings(&self, server_url: &str, image_host: bool) -> ImportSettings {
        ImportSettings {
            input_dir: self.dir.clone(),
            access_token: "secret-token".to_string(),
            database_id: "db-123".to_string(),
            image_host_url: if image_host {
                format!("{}/images/", server_url)
            } else {
                String::new()
            },
            notion: NotionConfig {
                api_url: format!("{}/v1", server_url),
                ..Default::default()
            },
        }
    }
}

/// Takeout-shaped note fixtures
#[allow(dead_code)]
pub mod notes {
    pub const TEXT_NOTE: &str = r#"{
        "color": "DEFAULT",
        "isTrashed": false,
        "isPinned": true,
        "isArchived": false,
        "textContent": "First line\n\n\nSecond line",
        "title": "Plain note",
        "userEditedTimestampUsec": 1614870000000000,
        "createdTimestampUsec": 1614860000000000
    }"#;

    pub const CHECKLIST_NOTE: &str = r#"{
        "isTrashed": false,
        "isPinned": false,
        "isArchived": true,
        "listContent": [
            {"text": "Milk", "isChecked": true},
            {"text": "Eggs", "isChecked": false}
        ],
        "title": "Groceries",
        "userEditedTimestampUsec": 1614870000000000,
        "createdTimestampUsec": 1614860000000000
    }"#;

    pub const PHOTO_NOTE: &str = r#"{
        "attachments": [{"filePath": "photo.png", "mimetype": "image/png"}],
        "isPinned": false,
        "textContent": "",
        "title": "Holiday",
        "userEditedTimestampUsec": 1614870000000000,
        "createdTimestampUsec": 1614860000000000
    }"#;

    pub const MISSING_PHOTOS_NOTE: &str = r#"{
        "attachments": [
            {"filePath": "lost-1.jpg", "mimetype": "image/jpeg"},
            {"filePath": "lost-2.jpg", "mimetype": "image/jpeg"}
        ],
        "textContent": "Where did they go?",
        "title": "Lost photos",
        "userEditedTimestampUsec": 1614870000000000,
        "createdTimestampUsec": 1614860000000000
    }"#;

    pub const UNTITLED_NOTE: &str = r#"{
        "textContent": "No title here",
        "userEditedTimestampUsec": 1614870000000000,
        "createdTimestampUsec": 1614860000000000
    }"#;
}
