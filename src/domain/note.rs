// src/domain/note.rs
use crate::domain::ImportError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// One note of a Google Takeout Keep export.
///
/// Known fields are typed; everything else stays in `fields` in file order
/// so the boolean `is*` flags can be turned into tags.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct KeepNote {
    pub title: Option<String>,
    pub text_content: Option<String>,
    pub list_content: Option<Vec<ChecklistItem>>,
    pub attachments: Option<Vec<Attachment>>,
    pub created_timestamp_usec: Option<i64>,
    pub user_edited_timestamp_usec: Option<i64>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub text: String,
    #[serde(default)]
    pub is_checked: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_path: String,
    #[serde(default)]
    pub mimetype: Option<String>,
}

impl KeepNote {
    pub fn from_json(file: &str, json: &str) -> Result<Self, ImportError> {
        serde_json::from_str(json).map_err(|source| ImportError::Parse {
            file: file.to_string(),
            source,
        })
    }

    /// Reject notes that cannot become a page: a title is required, and so is
    /// at least one of text, checklist or attachments.
    pub fn validate(&self, file: &str) -> Result<&str, ImportError> {
        let title = self.title.as_deref().ok_or_else(|| ImportError::MalformedRecord {
            file: file.to_string(),
            reason: "No `title` (is this a valid Google Takeout json?)".to_string(),
        })?;

        if self.text_content.is_none() && self.list_content.is_none() && self.attachments.is_none()
        {
            return Err(ImportError::MalformedRecord {
                file: file.to_string(),
                reason: "No `textContent`, `listContent` or `attachments`".to_string(),
            });
        }

        Ok(title)
    }
}
