//! Data-access functions for the domain layer.
//!
//! Each function takes a connection or session, performs one query or
//! mutation and maps `DbErr` into `DomainError`.

pub mod authors;
pub mod books;

/// Default page size for list endpoints
pub const DEFAULT_LIMIT: u64 = 3;
/// Default number of rows skipped for list endpoints
pub const DEFAULT_OFFSET: u64 = 0;

/// `LIMIT`/`OFFSET` window applied to list queries.
///
/// `limit` is passed to the database verbatim, so `limit = 0` selects no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl Page {
    pub const fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_OFFSET)
    }
}
