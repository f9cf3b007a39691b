use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use gallery_fetch::{FetchState, GalleryItem, PhotoFetchService, ReqwestClient, build_request_url};

use crate::config::{Overrides, Settings};
use crate::ui::table::{Formatter, PhotoRow};

#[derive(Clone, Debug, Parser)]
#[command(name = "gallery", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,

    /// Configuration file (TOML). Missing files are ignored.
    #[arg(long, short, global = true, default_value = "gallery.toml")]
    pub config: PathBuf,

    /// Flickr API key. Overrides the config file and GALLERY_API_KEY.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Requested page size.
    #[arg(long, global = true)]
    pub per_page: Option<u32>,

    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "f", name = "fetch", about = "Fetch the first page of photos")]
    Fetch(FetchArg),
    #[command(name = "url", about = "Print the request URL")]
    Url,
}

#[derive(Clone, Debug, Args)]
pub struct FetchArg {
    /// Print the photos as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl App {
    pub async fn run(self) -> Result<()> {
        let overrides = Overrides {
            api_key: self.api_key.clone(),
            per_page: self.per_page,
        };
        let settings = Settings::load(&self.config, overrides)
            .with_context(|| format!("failed to load configuration from {}", self.config.display()))?;

        match &self.cmd {
            Commands::Fetch(arg) => fetch(&settings, arg).await,
            Commands::Url => {
                println!("{}", request_url(&settings)?);
                Ok(())
            }
        }
    }
}

fn request_url(settings: &Settings) -> Result<String> {
    Ok(build_request_url(&settings.flickr())?.to_string())
}

async fn fetch(settings: &Settings, arg: &FetchArg) -> Result<()> {
    if settings.api_key.trim().is_empty() {
        bail!("no API key configured; pass --api-key, set GALLERY_API_KEY, or add api_key to the config file");
    }

    let client = ReqwestClient::with_timeout(Duration::from_secs(settings.timeout_secs))?;
    let service = PhotoFetchService::new(client, settings.flickr());

    let mut photos = service.fetch_photos();
    let items = match photos.settled().await {
        FetchState::Success(items) => items,
        FetchState::Failure(e) => bail!("failed to fetch photos: {e}"),
        FetchState::Pending => bail!("fetch ended without a result"),
    };
    tracing::info!(count = items.len(), "photos received");

    if arg.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        println!("{}", render(&items));
    }
    Ok(())
}

fn render(items: &[GalleryItem]) -> String {
    let formatter = Formatter {
        header: None,
        footer: Some(format!("{} photos", items.len())),
        col_name: false,
    };
    formatter.build(items.iter().map(PhotoRow::from)).to_string()
}
