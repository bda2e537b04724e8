//! SeaORM adapter for the books table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::books;

pub mod dto;

pub use dto::BookCreate;

/// Books ordered by id, optionally restricted to one author.
pub async fn list_books<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: Option<i64>,
    limit: u64,
    offset: u64,
) -> Result<Vec<books::Model>, sea_orm::DbErr> {
    let mut query = books::Entity::find();

    if let Some(author_id) = author_id {
        query = query.filter(books::Column::AuthorId.eq(author_id));
    }

    query
        .order_by_asc(books::Column::Id)
        .limit(limit)
        .offset(offset)
        .all(conn)
        .await
}

pub async fn find_book_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Option<books::Model>, sea_orm::DbErr> {
    books::Entity::find_by_id(book_id).one(conn).await
}

pub async fn create_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BookCreate,
) -> Result<books::Model, sea_orm::DbErr> {
    let book_active = books::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        summary: Set(dto.summary),
        publication_date: Set(dto.publication_date),
        author_id: Set(dto.author_id),
    };

    book_active.insert(conn).await
}
