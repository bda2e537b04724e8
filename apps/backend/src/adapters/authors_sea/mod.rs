//! SeaORM adapter for the authors table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::authors;

pub mod dto;

pub use dto::AuthorCreate;

pub async fn list_authors<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
    offset: u64,
) -> Result<Vec<authors::Model>, sea_orm::DbErr> {
    authors::Entity::find()
        .order_by_asc(authors::Column::Id)
        .limit(limit)
        .offset(offset)
        .all(conn)
        .await
}

pub async fn find_author_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: i64,
) -> Result<Option<authors::Model>, sea_orm::DbErr> {
    authors::Entity::find_by_id(author_id).one(conn).await
}

pub async fn find_author_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<authors::Model>, sea_orm::DbErr> {
    authors::Entity::find()
        .filter(authors::Column::Name.eq(name))
        .order_by_asc(authors::Column::Id)
        .one(conn)
        .await
}

pub async fn create_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AuthorCreate,
) -> Result<authors::Model, sea_orm::DbErr> {
    let author_active = authors::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        bio: Set(dto.bio),
    };

    author_active.insert(conn).await
}
