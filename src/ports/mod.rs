// src/ports/mod.rs
pub mod notion;

pub use notion::NotionPresenter;
