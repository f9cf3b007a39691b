//! Pure transformations for gallery fetching.
//!
//! Everything here is synchronous and free of I/O: building the request URL,
//! decoding a response body, and dropping records that cannot be displayed.

mod filter;
mod parse;
mod request;

pub use filter::{FilteredGallery, is_blank, retain_displayable};
pub use parse::parse_gallery;
pub use request::{REST_PATH, build_request_url};
