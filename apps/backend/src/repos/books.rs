//! Repository functions for books.

use sea_orm::ConnectionTrait;
use time::Date;

use super::Page;
use crate::adapters::books_sea as adapter;
use crate::entities::books;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub use adapter::BookCreate;

/// Book domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub publication_date: Date,
    pub author_id: i64,
}

impl From<books::Model> for Book {
    fn from(model: books::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            summary: model.summary,
            publication_date: model.publication_date,
            author_id: model.author_id,
        }
    }
}

/// List books, restricted to `author_id` when given.
pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: Option<i64>,
    page: Page,
) -> Result<Vec<Book>, DomainError> {
    let rows = adapter::list_books(conn, author_id, page.limit, page.offset)
        .await
        .map_err(map_db_err)?;
    Ok(rows.into_iter().map(Book::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Option<Book>, DomainError> {
    let row = adapter::find_book_by_id(conn, book_id)
        .await
        .map_err(map_db_err)?;
    Ok(row.map(Book::from))
}

/// Insert a new book. The caller is responsible for checking the author exists.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BookCreate,
) -> Result<Book, DomainError> {
    let model = adapter::create_book(conn, dto).await.map_err(map_db_err)?;
    Ok(Book::from(model))
}
