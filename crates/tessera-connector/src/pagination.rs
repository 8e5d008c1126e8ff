//! Cursor-based pagination types shared by every resource adapter.
//!
//! The protocol: a listing request carries an optional [`PageToken`] (absent
//! on the first page) and a page-size hint. The remote endpoint answers with
//! a page of raw elements plus a page boundary (end cursor, has-next-page
//! flag). Adapters expose a continuation token to the caller **only** when
//! the boundary reports more pages; otherwise the returned [`ListPage`]
//! carries `next: None`, which is the signal the driving host relies on to
//! stop calling.
//!
//! "First page" and "no more pages" are therefore distinct states of
//! distinct types (`PageRequest { token: None }` vs `ListPage { next: None }`)
//! rather than two meanings of one empty string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque continuation token issued by a paged listing endpoint.
///
/// A token is never empty; emptiness on the wire means "no token" and maps
/// to `Option::None` here. A token is only valid for the endpoint that
/// issued it: handing a token from one listing to another is undefined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PageToken(String);

impl PageToken {
    /// Create a token from a raw cursor value.
    ///
    /// Returns `None` for an empty string.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    /// Get the raw cursor value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, returning the raw cursor value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PageToken {
    type Error = EmptyPageToken;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        PageToken::new(raw).ok_or(EmptyPageToken)
    }
}

impl From<PageToken> for String {
    fn from(token: PageToken) -> Self {
        token.0
    }
}

/// Error constructing a [`PageToken`] from an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyPageToken;

impl fmt::Display for EmptyPageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page token cannot be empty")
    }
}

impl std::error::Error for EmptyPageToken {}

/// Pagination request for listing operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageRequest {
    /// Continuation token from the previous page; `None` requests the first
    /// page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<PageToken>,

    /// Requested page size. A hint only; the server may return fewer or
    /// more elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PageRequest {
    /// Create a request for the first page with no size hint.
    pub fn first() -> Self {
        Self::default()
    }

    /// Create a request for the first page with the given page size.
    pub fn new(page_size: u32) -> Self {
        Self {
            token: None,
            page_size: Some(page_size),
        }
    }

    /// Set the continuation token.
    #[must_use]
    pub fn with_token(mut self, token: PageToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Get the raw cursor value, if any.
    pub fn token_str(&self) -> Option<&str> {
        self.token.as_ref().map(PageToken::as_str)
    }
}

/// One page of a listing result.
///
/// `next: None` means the sequence is exhausted. Adapters must never set
/// `next` from an end cursor whose page boundary reported no further pages,
/// whatever the raw cursor value was.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPage<T> {
    /// The mapped items of this page.
    pub items: Vec<T>,

    /// Continuation token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageToken>,
}

impl<T> ListPage<T> {
    /// Create a page with the given items and no continuation.
    pub fn new(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    /// Create an empty final page.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Set the continuation token.
    #[must_use]
    pub fn with_next(mut self, token: PageToken) -> Self {
        self.next = Some(token);
        self
    }

    /// Check whether more pages exist.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// Get the number of items in this page.
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self::empty()
    }
}
