//! Immutable data types for gallery fetching.
//!
//! This module contains the wire types decoded from the Flickr REST API, the
//! request configuration, and the tagged state published to subscribers. None
//! of these types perform I/O.

pub mod config;
pub mod item;
pub mod state;

pub use config::FlickrConfig;
pub use item::{FlickrResponse, GalleryItem, PhotoPage};
pub use state::FetchState;
