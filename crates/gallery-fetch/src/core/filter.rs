use crate::data::GalleryItem;

/// Items kept after validation, plus how many were dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredGallery {
    pub items: Vec<GalleryItem>,
    pub dropped: usize,
}

/// Returns `true` if `s` is empty or consists only of whitespace.
///
/// # Examples
///
/// ```
/// use gallery_fetch::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t\n"));
/// assert!(!is_blank("https://live.staticflickr.com/1/2_s.jpg"));
/// ```
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Drop every item whose image URL is blank, keeping the others in order.
///
/// # Examples
///
/// ```
/// use gallery_fetch::{GalleryItem, retain_displayable};
///
/// let filtered = retain_displayable(vec![
///     GalleryItem::new("1", "x", "http://a"),
///     GalleryItem::new("2", "y", ""),
/// ]);
/// assert_eq!(filtered.items, vec![GalleryItem::new("1", "x", "http://a")]);
/// assert_eq!(filtered.dropped, 1);
/// ```
pub fn retain_displayable(items: Vec<GalleryItem>) -> FilteredGallery {
    let total = items.len();
    let items: Vec<GalleryItem> = items.into_iter().filter(|item| !is_blank(&item.url)).collect();

    FilteredGallery {
        dropped: total - items.len(),
        items,
    }
}
