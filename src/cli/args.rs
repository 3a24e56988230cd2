// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// Directory holding the Takeout Keep export (default: keep-data)
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Path to TOML configuration file (optional)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Notion integration token
    #[arg(long, env = "NOTION_ACCESS_KEY", hide_env_values = true)]
    pub token: Option<String>,

    /// Notion database receiving the pages
    #[arg(long, env = "NOTION_DATABASE_ID")]
    pub database_id: Option<String>,

    /// Base URL of the image host, attachments are not uploaded when empty
    #[arg(long, env = "IMAGE_HOST_URL")]
    pub image_host: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
