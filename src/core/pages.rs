//! Lazy pagination over a link-chained listing endpoint
//!
//! A `Pages` iterator starts at the first page and follows each page's `next`
//! link until a page arrives without one. It stops for good after the first
//! error; the only way to recount is to start a new iterator from page one.

use crate::error::ApiError;

/// Which request to issue next
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PageRequest {
    /// The initial request, built from the source's own query parameters
    First,
    /// A follow-up request to a server-provided URL, sent verbatim
    Next(String),
}

#[derive(Debug)]
pub(crate) struct Page<T> {
    pub(crate) items: Vec<T>,
    pub(crate) next: Option<String>,
}

/// Anything that can fetch one page of a paginated listing
pub(crate) trait PageSource {
    type Item;

    fn fetch(&self, request: &PageRequest) -> Result<Page<Self::Item>, ApiError>;
}

pub(crate) struct Pages<'a, S: PageSource> {
    source: &'a S,
    pending: Option<PageRequest>,
}

impl<'a, S: PageSource> Pages<'a, S> {
    pub(crate) fn new(source: &'a S) -> Self {
        Self {
            source,
            pending: Some(PageRequest::First),
        }
    }
}

impl<S: PageSource> Iterator for Pages<'_, S> {
    type Item = Result<Page<S::Item>, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        let request = self.pending.take()?;
        match self.source.fetch(&request) {
            Ok(page) => {
                self.pending = page.next.clone().map(PageRequest::Next);
                Some(Ok(page))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl<S: PageSource> std::iter::FusedIterator for Pages<'_, S> {}
