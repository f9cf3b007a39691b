//! Fetches one page of Flickr photo metadata and publishes validated gallery items.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and wire types
//! - [`core`] - Pure transformations (parse, filter, request URL)
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Key Features
//!
//! - **Non-blocking**: [`PhotoFetchService::fetch_photos`] returns a pending
//!   [`ObservableResult`] immediately and resolves it on a Tokio task
//! - **Tagged outcome**: the observable settles to [`FetchState::Success`] or
//!   [`FetchState::Failure`], so "no update yet" and "failed" stay distinct
//! - **Validated items**: records with a blank image URL never reach the caller;
//!   the number dropped is reported in [`FilteredGallery`]
//!
//! # Example
//!
//! ```no_run
//! use gallery_fetch::{FlickrConfig, PhotoFetchService, ReqwestClient};
//!
//! # async fn run() -> gallery_fetch::Result<()> {
//! let config = FlickrConfig::default().api_key("your-api-key");
//! let service = PhotoFetchService::new(ReqwestClient::new()?, config);
//!
//! service.fetch_photos().subscribe(|items| {
//!     for item in items {
//!         println!("{}: {}", item.title, item.url);
//!     }
//! });
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use self::core::{FilteredGallery, build_request_url, is_blank, parse_gallery, retain_displayable};
pub use self::data::{FetchState, FlickrConfig, FlickrResponse, GalleryItem, PhotoPage};
pub use self::effects::{HttpClient, HttpResponse, ObservableResult, PhotoFetchService};

#[cfg(feature = "reqwest")]
pub use self::effects::ReqwestClient;

pub use self::error::{FetchError, Result};
