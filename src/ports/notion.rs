// src/ports/notion.rs
use crate::domain::{ContentBlock, PagePayload, PropertyNames};
use serde_json::{json, Map, Value};
use tracing::instrument;

/// Renders a `PagePayload` as the JSON body of `POST /v1/pages`
#[derive(Debug, Clone)]
pub struct NotionPresenter {
    database_id: String,
    properties: PropertyNames,
}

impl NotionPresenter {
    pub fn new(database_id: impl Into<String>, properties: PropertyNames) -> Self {
        Self {
            database_id: database_id.into(),
            properties,
        }
    }

    #[instrument(level = "trace", skip_all, ret)]
    pub fn render(&self, page: &PagePayload) -> Value {
        let mut properties = Map::new();
        properties.insert(
            self.properties.title.clone(),
            json!({ "title": [text(&page.title)] }),
        );
        if let Some(created) = &page.created {
            properties.insert(
                self.properties.created.clone(),
                json!({ "date": { "start": created } }),
            );
        }
        if let Some(edited) = &page.edited {
            properties.insert(
                self.properties.edited.clone(),
                json!({ "date": { "start": edited } }),
            );
        }
        let tags: Vec<Value> = page.tags.iter().map(|name| json!({ "name": name })).collect();
        properties.insert(self.properties.tags.clone(), json!({ "multi_select": tags }));

        let children: Vec<Value> = page.children.iter().map(render_block).collect();

        json!({
            "parent": {
                "type": "database_id",
                "database_id": self.database_id,
            },
            "properties": properties,
            "children": children,
        })
    }
}

fn text(content: &str) -> Value {
    json!({ "type": "text", "text": { "content": content } })
}

fn render_block(block: &ContentBlock) -> Value {
    match block {
        ContentBlock::Paragraph(line) => json!({
            "object": "block",
            "type": "paragraph",
            "paragraph": { "rich_text": [text(line)] },
        }),
        ContentBlock::ToDo { text: item, checked } => json!({
            "object": "block",
            "type": "to_do",
            "to_do": {
                "rich_text": [text(item)],
                "checked": checked,
                "color": "default",
            },
        }),
        ContentBlock::Image { url } => json!({
            "object": "block",
            "type": "image",
            "image": {
                "type": "external",
                "external": { "url": url },
            },
        }),
    }
}
