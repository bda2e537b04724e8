//! Repository functions for authors.

use sea_orm::ConnectionTrait;

use super::Page;
use crate::adapters::authors_sea as adapter;
use crate::entities::authors;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub use adapter::AuthorCreate;

/// Author domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
}

impl From<authors::Model> for Author {
    fn from(model: authors::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            bio: model.bio,
        }
    }
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: Page,
) -> Result<Vec<Author>, DomainError> {
    let rows = adapter::list_authors(conn, page.limit, page.offset)
        .await
        .map_err(map_db_err)?;
    Ok(rows.into_iter().map(Author::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: i64,
) -> Result<Option<Author>, DomainError> {
    let row = adapter::find_author_by_id(conn, author_id)
        .await
        .map_err(map_db_err)?;
    Ok(row.map(Author::from))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<Author>, DomainError> {
    let row = adapter::find_author_by_name(conn, name)
        .await
        .map_err(map_db_err)?;
    Ok(row.map(Author::from))
}

/// Insert a new author and return it with its assigned id.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AuthorCreate,
) -> Result<Author, DomainError> {
    let model = adapter::create_author(conn, dto)
        .await
        .map_err(map_db_err)?;
    Ok(Author::from(model))
}

/// Like [`find_by_id`], but a missing author is an error.
pub async fn require<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: i64,
) -> Result<Author, DomainError> {
    find_by_id(conn, author_id)
        .await?
        .ok_or_else(|| DomainError::author_not_found(author_id))
}
