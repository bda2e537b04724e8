//! Error codes for the library API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in HTTP responses.

use core::fmt;

/// Centralized error codes for the library API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Request body, query or path could not be coerced to the expected types
    ValidationError,
    /// Pagination parameter out of range
    InvalidPagination,
    /// Path id is not an integer
    InvalidId,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Author not found
    AuthorNotFound,
    /// Book not found
    BookNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Author name already taken
    AuthorNameExists,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Foreign key constraint violation
    FkViolation,
    /// Configuration error
    ConfigError,
    /// Stored data could not be mapped to the domain
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidPagination => "INVALID_PAGINATION",
            Self::InvalidId => "INVALID_ID",
            Self::BadRequest => "BAD_REQUEST",

            Self::AuthorNotFound => "AUTHOR_NOT_FOUND",
            Self::BookNotFound => "BOOK_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::AuthorNameExists => "AUTHOR_NAME_EXISTS",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::FkViolation => "FK_VIOLATION",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
