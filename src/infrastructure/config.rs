// src/infrastructure/config.rs
use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_NOTION_API_URL, DEFAULT_NOTION_VERSION};
use crate::domain::PropertyNames;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional TOML configuration; secrets stay in the environment
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub notion: NotionConfig,
    #[serde(default)]
    pub import: ImportConfig,
}

/// Endpoint and database schema of the Notion target
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NotionConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_title_property")]
    pub title_property: String,
    #[serde(default = "default_created_property")]
    pub created_property: String,
    #[serde(default = "default_edited_property")]
    pub edited_property: String,
    #[serde(default = "default_tags_property")]
    pub tags_property: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ImportConfig {
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
}

// Default value functions
fn default_api_url() -> String { DEFAULT_NOTION_API_URL.to_string() }
fn default_version() -> String { DEFAULT_NOTION_VERSION.to_string() }
fn default_title_property() -> String { "title".to_string() }
fn default_created_property() -> String { "Created".to_string() }
fn default_edited_property() -> String { "Edited".to_string() }
fn default_tags_property() -> String { "Tags".to_string() }
fn default_input_dir() -> String { DEFAULT_INPUT_DIR.to_string() }

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            version: default_version(),
            title_property: default_title_property(),
            created_property: default_created_property(),
            edited_property: default_edited_property(),
            tags_property: default_tags_property(),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
        }
    }
}

impl NotionConfig {
    pub fn property_names(&self) -> PropertyNames {
        PropertyNames {
            title: self.title_property.clone(),
            created: self.created_property.clone(),
            edited: self.edited_property.clone(),
            tags: self.tags_property.clone(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }
}

/// Everything a run needs, resolved once at startup and read-only afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSettings {
    pub input_dir: PathBuf,
    pub access_token: String,
    pub database_id: String,
    /// Empty when attachments should not be uploaded
    pub image_host_url: String,
    pub notion: NotionConfig,
}

impl ImportSettings {
    /// Combine the file configuration with command line / environment values.
    ///
    /// Token and database id are required; the image host is optional.
    pub fn new(
        config: Config,
        input_dir: Option<PathBuf>,
        access_token: Option<String>,
        database_id: Option<String>,
        image_host_url: Option<String>,
    ) -> Result<Self> {
        let access_token = non_empty(access_token);
        let database_id = non_empty(database_id);

        let Some(access_token) = access_token else {
            bail!("No Notion access token, set NOTION_ACCESS_KEY or pass --token");
        };
        let Some(database_id) = database_id else {
            bail!("No Notion database id, set NOTION_DATABASE_ID or pass --database-id");
        };

        Ok(Self {
            input_dir: input_dir.unwrap_or_else(|| PathBuf::from(&config.import.input_dir)),
            access_token,
            database_id,
            image_host_url: image_host_url.unwrap_or_default(),
            notion: config.notion,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_toml_file_when_loading_then_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("keep2notion.toml");

        let toml_content = r#"
[notion]
api_url = "http://localhost:9000/v1"
version = "2025-01-01"
title_property = "Name"
created_property = "Created at"
edited_property = "Updated at"
tags_property = "Labels"

[import]
input_dir = "/exports/Keep"
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.notion.api_url, "http://localhost:9000/v1");
        assert_eq!(config.notion.version, "2025-01-01");
        assert_eq!(config.notion.title_property, "Name");
        assert_eq!(config.notion.tags_property, "Labels");
        assert_eq!(config.import.input_dir, "/exports/Keep");
    }

    #[test]
    fn given_partial_toml_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        fs::write(&config_path, "[notion]\ntags_property = \"Labels\"\n").unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.notion.tags_property, "Labels");
        assert_eq!(config.notion.api_url, "https://api.notion.com/v1");
        assert_eq!(config.notion.version, "2022-06-28");
        assert_eq!(config.notion.title_property, "title");
        assert_eq!(config.import.input_dir, "keep-data");
    }

    #[test]
    fn given_partial_notion_config_when_taking_property_names_then_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("names.toml");
        fs::write(&config_path, "[notion]\ntitle_property = \"Name\"\n").unwrap();

        let names = Config::load(&config_path).unwrap().notion.property_names();

        assert_eq!(
            names,
            PropertyNames {
                title: "Name".to_string(),
                ..PropertyNames::default()
            }
        );
        assert_eq!(NotionConfig::default().property_names(), PropertyNames::default());
    }

    #[test]
    fn given_nonexistent_file_when_loading_then_returns_error() {
        let result = Config::load("/nonexistent/path/config.toml");

        assert!(result.is_err());
    }

    #[test]
    fn given_invalid_toml_when_loading_then_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.toml");
        fs::write(&config_path, "[notion\napi_url = ").unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn given_all_values_when_resolving_settings_then_uses_them() {
        let settings = ImportSettings::new(
            Config::default(),
            Some(PathBuf::from("/tmp/keep")),
            Some("secret".to_string()),
            Some("db-123".to_string()),
            Some("https://images.example.com/".to_string()),
        )
        .unwrap();

        assert_eq!(settings.input_dir, PathBuf::from("/tmp/keep"));
        assert_eq!(settings.access_token, "secret");
        assert_eq!(settings.database_id, "db-123");
        assert_eq!(settings.image_host_url, "https://images.example.com/");
    }

    #[test]
    fn given_no_input_dir_when_resolving_settings_then_uses_config_default() {
        let settings = ImportSettings::new(
            Config::default(),
            None,
            Some("secret".to_string()),
            Some("db-123".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(settings.input_dir, PathBuf::from("keep-data"));
        assert_eq!(settings.image_host_url, "");
    }

    #[test]
    fn given_blank_token_when_resolving_settings_then_returns_error() {
        let result = ImportSettings::new(
            Config::default(),
            None,
            Some("  ".to_string()),
            Some("db-123".to_string()),
            None,
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("NOTION_ACCESS_KEY"));
    }

    #[test]
    fn given_missing_database_id_when_resolving_settings_then_returns_error() {
        let result = ImportSettings::new(
            Config::default(),
            None,
            Some("secret".to_string()),
            None,
            None,
        );

        assert!(result.is_err());
    }
}
