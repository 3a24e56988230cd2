// src/infrastructure/notion.rs
use crate::application::PageRepository;
use crate::constants::NOTION_SUCCESS_STATUS;
use crate::domain::{ImportError, PagePayload};
use crate::ports::NotionPresenter;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::{debug, instrument};

/// Creates pages through the Notion REST API
pub struct NotionClient {
    client: Client,
    pages_url: String,
    version: String,
    access_token: String,
    presenter: NotionPresenter,
}

impl NotionClient {
    pub fn new(
        api_url: &str,
        version: &str,
        access_token: &str,
        presenter: NotionPresenter,
    ) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client for Notion")?;

        Ok(Self {
            client,
            pages_url: format!("{}/pages", api_url.trim_end_matches('/')),
            version: version.to_string(),
            access_token: access_token.to_string(),
            presenter,
        })
    }

    #[cfg(test)]
    fn pages_url(&self) -> &str {
        &self.pages_url
    }
}

impl PageRepository for NotionClient {
    #[instrument(level = "debug", skip_all, fields(title = %payload.title))]
    fn create_page(&mut self, payload: &PagePayload) -> Result<(), ImportError> {
        let body = self.presenter.render(payload);

        let response = self
            .client
            .post(&self.pages_url)
            .bearer_auth(&self.access_token)
            .header("Notion-Version", &self.version)
            .json(&body)
            .send()
            .map_err(|e| ImportError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        debug!(status, "Notion answered");

        if status == NOTION_SUCCESS_STATUS {
            Ok(())
        } else {
            let body = response.text().unwrap_or_default();
            Err(ImportError::SubmissionFailed { status, body })
        }
    }
}
