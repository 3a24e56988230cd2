// src/domain/mod.rs
pub mod error;
pub mod note;
pub mod page;
pub mod tags;

pub use error::ImportError;
pub use note::{Attachment, ChecklistItem, KeepNote};
pub use page::{ContentBlock, PagePayload, PropertyNames};
pub use tags::derive_tags;
