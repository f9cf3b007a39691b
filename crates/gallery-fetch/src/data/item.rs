use serde::{Deserialize, Serialize};

/// One photo record from the feed.
///
/// Decoded straight from the wire; a blank [`url`](Self::url) marks a record
/// that cannot be displayed. Fields missing from the response decode as empty
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// Small-size image URL (`url_s` on the wire).
    #[serde(rename = "url_s", default)]
    pub url: String,
}

impl GalleryItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
        }
    }
}

/// One page of the photo feed.
///
/// Only [`photo`](Self::photo) is consumed; the pagination fields are kept for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PhotoPage {
    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub pages: Option<u32>,

    #[serde(default)]
    pub perpage: Option<u32>,

    #[serde(default)]
    pub total: Option<u64>,

    #[serde(default)]
    pub photo: Option<Vec<GalleryItem>>,
}

/// Top-level response envelope of the Flickr REST API.
///
/// Successful calls carry `photos`; failed calls carry `stat: "fail"` with a
/// `code` and `message`, still with HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct FlickrResponse {
    #[serde(default)]
    pub photos: Option<PhotoPage>,

    #[serde(default)]
    pub stat: Option<String>,

    #[serde(default)]
    pub code: Option<i64>,

    #[serde(default)]
    pub message: Option<String>,
}

impl FlickrResponse {
    /// Returns `true` if the API reported `stat: "fail"`.
    pub fn is_failure(&self) -> bool {
        self.stat.as_deref() == Some("fail")
    }

    /// Consume the envelope and return its items, empty if any level is absent.
    pub fn into_items(self) -> Vec<GalleryItem> {
        self.photos.and_then(|page| page.photo).unwrap_or_default()
    }
}
