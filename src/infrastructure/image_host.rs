// src/infrastructure/image_host.rs
use crate::application::AssetStore;
use crate::constants::{ATTACHMENT_EXTENSION_LEN, IMAGE_HOST_ACCEPTED_STATUS, UPLOAD_FIELD_NAME};
use crate::domain::ImportError;
use anyhow::{Context, Result};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Uploads attachments to the image server; the upload URL doubles as the public URL
pub struct ImageHostClient {
    client: Client,
    base_url: String,
}

impl ImageHostClient {
    /// An empty `base_url` disables uploads
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client for image host")?;

        Ok(Self {
            client,
            base_url: base_url.trim().to_string(),
        })
    }

    /// `{base}{id}.{ext}` with a fresh random id
    pub fn target_url(&self, file_name: &str) -> String {
        format!(
            "{}{}.{}",
            self.base_url,
            Uuid::new_v4(),
            extension(file_name)
        )
    }
}

/// Last three characters of the file name
pub fn extension(file_name: &str) -> String {
    let chars: Vec<char> = file_name.chars().collect();
    let start = chars.len().saturating_sub(ATTACHMENT_EXTENSION_LEN);
    chars[start..].iter().collect()
}

impl AssetStore for ImageHostClient {
    fn is_enabled(&self) -> bool {
        !self.base_url.is_empty()
    }

    #[instrument(level = "debug", skip(self, data), fields(size = data.len()))]
    fn upload(&mut self, file_name: &str, data: Vec<u8>) -> Result<String, ImportError> {
        let url = self.target_url(file_name);
        let upload_failed = |reason: String| ImportError::AttachmentUploadFailed {
            path: file_name.to_string(),
            reason,
        };

        let form = Form::new().part(
            UPLOAD_FIELD_NAME,
            Part::bytes(data).file_name(file_name.to_string()),
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| upload_failed(e.to_string()))?;

        let status = response.status().as_u16();
        debug!(status, %url, "Image host answered");

        if status == IMAGE_HOST_ACCEPTED_STATUS {
            Ok(url)
        } else {
            let body = response.text().unwrap_or_default();
            Err(upload_failed(format!("status {}: {}", status, body)))
        }
    }
}
