//! Query parameters for the list endpoints.

use serde::Deserialize;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::{Page, DEFAULT_LIMIT, DEFAULT_OFFSET};

fn default_limit() -> i64 {
    DEFAULT_LIMIT as i64
}

fn default_offset() -> i64 {
    DEFAULT_OFFSET as i64
}

/// Reject negative values; everything else is passed through as-is.
fn checked_page(limit: i64, offset: i64) -> Result<Page, AppError> {
    let limit = u64::try_from(limit)
        .map_err(|_| AppError::invalid(ErrorCode::InvalidPagination, "limit must be >= 0"))?;
    let offset = u64::try_from(offset)
        .map_err(|_| AppError::invalid(ErrorCode::InvalidPagination, "offset must be >= 0"))?;
    Ok(Page::new(limit, offset))
}

/// `GET /author/` query
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default = "default_offset")]
    pub offset: i64,
}

impl AuthorListQuery {
    pub fn page(&self) -> Result<Page, AppError> {
        checked_page(self.limit, self.offset)
    }
}

/// `GET /book/` query
#[derive(Debug, Clone, Deserialize)]
pub struct BookListQuery {
    pub author_id: Option<i64>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default = "default_offset")]
    pub offset: i64,
}

impl BookListQuery {
    pub fn page(&self) -> Result<Page, AppError> {
        checked_page(self.limit, self.offset)
    }
}
