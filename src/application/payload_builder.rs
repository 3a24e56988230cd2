// src/application/payload_builder.rs
use crate::application::AttachmentOutcome;
use crate::domain::{derive_tags, ContentBlock, KeepNote, PagePayload};
use chrono::{DateTime, Local};

/// Assemble the page for a validated note.
///
/// Block order: checklist items, then the attachment section, then the text
/// body. Attachment tags are appended after the flag tags.
pub fn build_payload(title: &str, note: &KeepNote, attachments: AttachmentOutcome) -> PagePayload {
    let mut children = Vec::new();

    if let Some(items) = &note.list_content {
        children.extend(items.iter().map(|item| ContentBlock::ToDo {
            text: item.text.clone(),
            checked: item.is_checked,
        }));
    }

    children.extend(attachments.blocks);

    if let Some(body) = &note.text_content {
        children.extend(paragraphs(body));
    }

    let mut tags = derive_tags(&note.fields);
    for tag in attachments.extra_tags {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    PagePayload {
        title: title.to_string(),
        created: note.created_timestamp_usec.and_then(format_timestamp),
        edited: note.user_edited_timestamp_usec.and_then(format_timestamp),
        tags,
        children,
    }
}

/// Characters that end a line of note text; `\r\n` counts as one break.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split on every line break, with no trailing empty line after a final break.
pub fn split_lines(body: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = body.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }
        lines.push(&body[start..index]);
        start = index + c.len_utf8();
        if c == '\r' {
            if let Some((_, '\n')) = chars.peek() {
                chars.next();
                start += 1;
            }
        }
    }

    if start < body.len() {
        lines.push(&body[start..]);
    }
    lines
}

/// One paragraph per line; a blank line is kept only when the line before it
/// was not blank, so leading blanks vanish and runs collapse to one.
pub fn paragraphs(body: &str) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    let mut last_blank = true;

    for line in split_lines(body) {
        let blank = line.is_empty();
        if blank && last_blank {
            continue;
        }
        blocks.push(ContentBlock::Paragraph(line.to_string()));
        last_blank = blank;
    }

    blocks
}

/// Microseconds since the epoch as a local RFC 3339 date-time.
pub fn format_timestamp(usec: i64) -> Option<String> {
    DateTime::from_timestamp_micros(usec).map(|utc| utc.with_timezone(&Local).to_rfc3339())
}
