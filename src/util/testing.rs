// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{AssetStore, PageRepository};
use crate::domain::{ImportError, PagePayload};

/// Records every page it is asked to create instead of calling Notion.
///
/// # Examples
///
/// ```
/// use keep2notion::util::testing::MockPageRepository;
///
/// let mock = MockPageRepository::builder()
///     .with_failure(400, r#"{"message":"validation_error"}"#)
///     .build();
/// assert!(mock.created().is_empty());
/// ```
pub struct MockPageRepository {
    created: Vec<PagePayload>,
    failure: Option<(u16, String)>,
}

impl MockPageRepository {
    pub fn builder() -> MockPageRepositoryBuilder {
        MockPageRepositoryBuilder::new()
    }

    /// Pages accepted so far, in submission order
    pub fn created(&self) -> &[PagePayload] {
        &self.created
    }
}

impl PageRepository for MockPageRepository {
    fn create_page(&mut self, payload: &PagePayload) -> Result<(), ImportError> {
        match &self.failure {
            Some((status, body)) => Err(ImportError::SubmissionFailed {
                status: *status,
                body: body.clone(),
            }),
            None => {
                self.created.push(payload.clone());
                Ok(())
            }
        }
    }
}

pub struct MockPageRepositoryBuilder {
    failure: Option<(u16, String)>,
}

impl MockPageRepositoryBuilder {
    pub fn new() -> Self {
        Self { failure: None }
    }

    /// Reject every page with the given status and body
    pub fn with_failure(mut self, status: u16, body: &str) -> Self {
        self.failure = Some((status, body.to_string()));
        self
    }

    pub fn build(self) -> MockPageRepository {
        MockPageRepository {
            created: Vec::new(),
            failure: self.failure,
        }
    }
}

impl Default for MockPageRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Records uploads and hands out `https://images.test/<n>.<ext>` URLs.
pub struct MockAssetStore {
    enabled: bool,
    failure_status: Option<u16>,
    uploads: Vec<(String, usize)>,
}

impl MockAssetStore {
    pub fn builder() -> MockAssetStoreBuilder {
        MockAssetStoreBuilder::new()
    }

    /// `(file name, byte count)` of every upload attempt
    pub fn uploads(&self) -> &[(String, usize)] {
        &self.uploads
    }
}

impl AssetStore for MockAssetStore {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn upload(&mut self, file_name: &str, data: Vec<u8>) -> Result<String, ImportError> {
        self.uploads.push((file_name.to_string(), data.len()));

        if let Some(status) = self.failure_status {
            return Err(ImportError::AttachmentUploadFailed {
                path: file_name.to_string(),
                reason: format!("status {}", status),
            });
        }

        let extension = file_name.rsplit('.').next().unwrap_or_default();
        Ok(format!(
            "https://images.test/{}.{}",
            self.uploads.len(),
            extension
        ))
    }
}

pub struct MockAssetStoreBuilder {
    enabled: bool,
    failure_status: Option<u16>,
}

impl MockAssetStoreBuilder {
    pub fn new() -> Self {
        Self {
            enabled: true,
            failure_status: None,
        }
    }

    /// Behave like an empty image host URL
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Reject every upload as if the host answered with `status`
    pub fn with_upload_failure(mut self, status: u16) -> Self {
        self.failure_status = Some(status);
        self
    }

    pub fn build(self) -> MockAssetStore {
        MockAssetStore {
            enabled: self.enabled,
            failure_status: self.failure_status,
            uploads: Vec::new(),
        }
    }
}

impl Default for MockAssetStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "rustls", "mockito"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
