use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.flickr.com/";
pub const DEFAULT_METHOD: &str = "flickr.interestingness.getList";
pub const DEFAULT_EXTRAS: &str = "url_s";

/// Static configuration for the Flickr REST endpoint.
///
/// Fixed at service construction; every request built from it targets the
/// first page of the feed.
///
/// # Examples
///
/// ```
/// use gallery_fetch::FlickrConfig;
///
/// let config = FlickrConfig::default()
///     .api_key("0123456789abcdef")
///     .per_page(50);
/// assert_eq!(config.method, "flickr.interestingness.getList");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlickrConfig {
    /// Root of the API host. The REST path is joined onto it.
    ///
    /// Default: `https://api.flickr.com/`
    pub base_url: String,

    /// API key sent as the `api_key` query parameter.
    ///
    /// Default: empty
    pub api_key: String,

    /// REST method to call.
    ///
    /// Default: `flickr.interestingness.getList`
    pub method: String,

    /// Comma-separated `extras` list. Must include `url_s` for items to carry
    /// an image URL.
    ///
    /// Default: `url_s`
    pub extras: String,

    /// Page size requested from the server. `None` leaves the server default.
    ///
    /// Default: None
    pub per_page: Option<u32>,
}

impl fmt::Debug for FlickrConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlickrConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"{ redacted }")
            .field("method", &self.method)
            .field("extras", &self.extras)
            .field("per_page", &self.per_page)
            .finish()
    }
}

impl Default for FlickrConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            method: DEFAULT_METHOD.to_string(),
            extras: DEFAULT_EXTRAS.to_string(),
            per_page: None,
        }
    }
}

impl FlickrConfig {
    /// Set the API host root.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the REST method.
    ///
    /// # Examples
    ///
    /// ```
    /// use gallery_fetch::FlickrConfig;
    ///
    /// let config = FlickrConfig::default().method("flickr.photos.getRecent");
    /// assert_eq!(config.method, "flickr.photos.getRecent");
    /// ```
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Set the `extras` list.
    #[must_use]
    pub fn extras(mut self, extras: impl Into<String>) -> Self {
        self.extras = extras.into();
        self
    }

    /// Set the requested page size.
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}
