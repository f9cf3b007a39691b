use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use gallery_fetch::FlickrConfig;
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "GALLERY_";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the `gallery` binary.
///
/// Layered, later wins: built-in defaults, the TOML file, `GALLERY_*`
/// environment variables, command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub api_key: String,
    pub method: String,
    pub extras: String,
    pub per_page: Option<u32>,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        let flickr = FlickrConfig::default();
        Self {
            base_url: flickr.base_url,
            api_key: flickr.api_key,
            method: flickr.method,
            extras: flickr.extras,
            per_page: flickr.per_page,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Settings {
    pub fn load(config_path: &Path, overrides: Overrides) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
            .extract()
    }

    pub fn flickr(&self) -> FlickrConfig {
        let config = FlickrConfig::default()
            .base_url(&self.base_url)
            .api_key(&self.api_key)
            .method(&self.method)
            .extras(&self.extras);
        match self.per_page {
            Some(per_page) => config.per_page(per_page),
            None => config,
        }
    }
}
