use crate::core::filter::{FilteredGallery, retain_displayable};
use crate::data::FlickrResponse;
use crate::error::{FetchError, Result};

/// Decode a response body and return its displayable items.
///
/// A JSON `null` body, a missing `photos` object, or a missing `photo` array
/// all yield an empty gallery, and so does a `stat: "fail"` envelope, which
/// carries no `photos`. Only an empty body or malformed JSON is an error.
///
/// # Examples
///
/// ```
/// use gallery_fetch::parse_gallery;
///
/// let body = br#"{"photos":{"photo":[
///     {"id":"1","title":"x","url_s":"http://a"},
///     {"id":"2","title":"y","url_s":""}
/// ]}}"#;
/// let gallery = parse_gallery(body).unwrap();
/// assert_eq!(gallery.items.len(), 1);
/// assert_eq!(gallery.dropped, 1);
/// ```
pub fn parse_gallery(body: &[u8]) -> Result<FilteredGallery> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::EmptyBody);
    }

    let Some(response) = serde_json::from_slice::<Option<FlickrResponse>>(body)? else {
        return Ok(FilteredGallery::default());
    };

    if response.is_failure() {
        tracing::warn!(
            code = response.code.unwrap_or_default(),
            reason = response.message.as_deref().unwrap_or_default(),
            "Flickr reported a failed call; publishing no items"
        );
    }

    Ok(retain_displayable(response.into_items()))
}
