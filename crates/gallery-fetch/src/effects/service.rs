use std::sync::Arc;

use url::Url;

use crate::core::{FilteredGallery, build_request_url, parse_gallery};
use crate::data::{FlickrConfig, GalleryItem};
use crate::effects::http::HttpClient;
use crate::effects::observable::ObservableResult;
use crate::error::{FetchError, Result};

/// Fetches the first page of the configured Flickr feed.
///
/// Holds no mutable state: every call builds its own request and its own
/// result, so one service can serve concurrent callers.
pub struct PhotoFetchService<C: HttpClient> {
    client: Arc<C>,
    config: Arc<FlickrConfig>,
}

impl<C: HttpClient> Clone for PhotoFetchService<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            config: Arc::clone(&self.config),
        }
    }
}

impl<C: HttpClient + 'static> PhotoFetchService<C> {
    pub fn new(client: C, config: FlickrConfig) -> Self {
        Self::from_shared(Arc::new(client), config)
    }

    /// Create a service around a client that is also used elsewhere.
    pub fn from_shared(client: Arc<C>, config: FlickrConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &FlickrConfig {
        &self.config
    }

    /// The URL [`fetch_photos`](Self::fetch_photos) will request.
    pub fn request_url(&self) -> Result<Url> {
        build_request_url(&self.config)
    }

    /// Start a fetch and return its result holder immediately.
    ///
    /// The request runs on a task spawned onto the current Tokio runtime. On
    /// failure the error is logged and the holder settles to
    /// [`FetchState::Failure`](crate::FetchState::Failure); items are never
    /// published in that case. Called outside a runtime, no request is issued
    /// and the holder settles to [`FetchError::NoRuntime`].
    pub fn fetch_photos(&self) -> ObservableResult<Vec<GalleryItem>> {
        let (publisher, observable) = ObservableResult::channel();

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch photos");
                publisher.fail(FetchError::NoRuntime(e.to_string()));
                return observable;
            }
        };

        let client = Arc::clone(&self.client);
        let config = Arc::clone(&self.config);

        handle.spawn(async move {
            match fetch_page(client.as_ref(), &config).await {
                Ok(gallery) => publisher.publish(gallery.items),
                Err(e) => {
                    tracing::error!(error = %e, method = %config.method, "failed to fetch photos");
                    publisher.fail(e);
                }
            }
        });

        observable
    }

    /// Fetch and filter one page, awaiting the result directly.
    ///
    /// Unlike [`fetch_photos`](Self::fetch_photos), this reports how many
    /// items were dropped and returns errors to the caller.
    pub async fn fetch_gallery(&self) -> Result<FilteredGallery> {
        fetch_page(self.client.as_ref(), &self.config).await
    }
}

async fn fetch_page<C: HttpClient>(client: &C, config: &FlickrConfig) -> Result<FilteredGallery> {
    let url = build_request_url(config)?;
    let headers = [("Accept".to_string(), "application/json".to_string())];

    let response = client
        .get(url.as_str(), &headers)
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    tracing::debug!(status = response.status, bytes = response.body.len(), "response received");

    if !response.is_success() {
        return Err(FetchError::HttpStatus { status: response.status });
    }

    let gallery = parse_gallery(&response.body)?;
    if gallery.dropped > 0 {
        tracing::debug!(
            kept = gallery.items.len(),
            dropped = gallery.dropped,
            "dropped items without an image URL"
        );
    }

    Ok(gallery)
}
