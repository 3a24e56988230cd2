// src/domain/page.rs

/// Page content in the order it appears in Notion.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Paragraph(String),
    ToDo { text: String, checked: bool },
    Image { url: String },
}

/// Everything needed to create one page, independent of the Notion wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePayload {
    pub title: String,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub tags: Vec<String>,
    pub children: Vec<ContentBlock>,
}

/// Names of the database properties a page fills in.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyNames {
    pub title: String,
    pub created: String,
    pub edited: String,
    pub tags: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            title: "title".to_string(),
            created: "Created".to_string(),
            edited: "Edited".to_string(),
            tags: "Tags".to_string(),
        }
    }
}
