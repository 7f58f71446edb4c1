//! Offset pagination over a fully materialized, ordered sequence.

use serde::Serialize;

/// Pagination metadata; serialized as JSON into the `X-Pagination` response
/// header so clients can page without inspecting the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_count: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// One page of a larger ordered result set plus the counts needed to
/// compute further pages.
#[derive(Debug)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> PagedList<T> {
    /// Takes the slice `[page_size*(n-1), page_size*n)` of `items`, clipped
    /// to bounds. A page number past the end yields an empty page with
    /// correct metadata. Zero page size or page number clamp to 1.
    pub fn from_items(items: Vec<T>, page_number: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let page_number = page_number.max(1);
        let total_count = items.len();
        let total_pages = (total_count + page_size - 1) / page_size;
        let start = page_size * (page_number - 1);
        let page: Vec<T> = items.into_iter().skip(start).take(page_size).collect();
        PagedList {
            items: page,
            meta: PageMeta {
                total_count,
                page_size,
                current_page: page_number,
                total_pages,
                has_next: page_number < total_pages,
                has_previous: page_number > 1,
            },
        }
    }

    /// Map items while keeping the metadata (entity -> DTO convenience).
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
