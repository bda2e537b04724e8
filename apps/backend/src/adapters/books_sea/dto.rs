//! DTOs for books_sea adapter.

use time::Date;

/// DTO for creating a new book.
#[derive(Debug, Clone)]
pub struct BookCreate {
    pub title: String,
    pub summary: Option<String>,
    pub publication_date: Date,
    pub author_id: i64,
}

impl BookCreate {
    pub fn new(title: impl Into<String>, publication_date: Date, author_id: i64) -> Self {
        Self {
            title: title.into(),
            summary: None,
            publication_date,
            author_id,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}
