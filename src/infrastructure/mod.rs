// src/infrastructure/mod.rs
pub mod config;
pub mod image_host;
pub mod notion;
pub mod source_reader;

pub use config::{Config, ImportSettings};
pub use image_host::ImageHostClient;
pub use notion::NotionClient;
