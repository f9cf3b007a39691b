use url::Url;

use crate::data::FlickrConfig;
use crate::error::Result;

/// Path of the Flickr REST endpoint, relative to the API host root.
pub const REST_PATH: &str = "services/rest/";

/// Build the URL for the first page of the configured feed.
///
/// The response is requested as raw JSON (`format=json&nojsoncallback=1`).
///
/// # Examples
///
/// ```
/// use gallery_fetch::{FlickrConfig, build_request_url};
///
/// let url = build_request_url(&FlickrConfig::default().api_key("k")).unwrap();
/// assert_eq!(url.path(), "/services/rest/");
/// assert!(url.query().unwrap().contains("api_key=k"));
/// ```
pub fn build_request_url(config: &FlickrConfig) -> Result<Url> {
    let mut base = Url::parse(&config.base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let mut url = base.join(REST_PATH)?;
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("method", &config.method)
            .append_pair("api_key", &config.api_key)
            .append_pair("format", "json")
            .append_pair("nojsoncallback", "1")
            .append_pair("extras", &config.extras);
        if let Some(per_page) = config.per_page {
            query.append_pair("per_page", &per_page.to_string());
        }
    }

    Ok(url)
}
