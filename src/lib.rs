// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use application::{ImportSummary, NoteImporter};
use infrastructure::{Config, ImageHostClient, ImportSettings, NotionClient};
use ports::NotionPresenter;
use tracing::{debug, info};
use crate::cli::args::Args;

pub fn run(args: Args) -> Result<ImportSummary> {
    debug!(input_dir = ?args.input_dir, config = ?args.config, "Starting keep2notion");

    let config = match &args.config {
        Some(path) => {
            debug!(?path, "Loading configuration file");
            Config::load(path).with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => Config::default(),
    };

    let settings = ImportSettings::new(
        config,
        args.input_dir,
        args.token,
        args.database_id,
        args.image_host,
    )?;

    let summary = import(&settings)?;
    println!(
        "Finished, {} Success, {} Failed.",
        summary.success, summary.failed
    );

    Ok(summary)
}

/// Wire the Notion and image host clients and import the whole input directory
pub fn import(settings: &ImportSettings) -> Result<ImportSummary> {
    let presenter = NotionPresenter::new(&settings.database_id, settings.notion.property_names());
    let pages = NotionClient::new(
        &settings.notion.api_url,
        &settings.notion.version,
        &settings.access_token,
        presenter,
    )?;
    let assets = ImageHostClient::new(&settings.image_host_url)?;

    if settings.image_host_url.is_empty() {
        info!("No image host configured, attachments will only be annotated");
    }

    let mut importer = NoteImporter::new(&settings.input_dir, pages, assets);
    importer.import_all()
}
