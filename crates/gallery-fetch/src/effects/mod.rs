//! I/O operations for gallery fetching.
//!
//! The HTTP transport sits behind [`HttpClient`] so the service can be driven
//! by `reqwest` in production and by an in-memory client in tests.

mod http;
mod observable;
mod service;

pub use http::{HttpClient, HttpResponse};
pub use observable::ObservableResult;
pub use service::PhotoFetchService;

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
