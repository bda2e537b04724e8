//! Table bootstrap from the entity definitions.
//!
//! Creates `authors` and `books` when they are missing. Production schemas
//! are managed outside this service; this exists for SQLite development
//! databases and the test suites.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};
use tracing::info;

use crate::entities::{Authors, Books};

pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // Parents first so the books foreign key resolves.
    create_table(db, &schema, Authors).await?;
    create_table(db, &schema, Books).await?;

    info!("schema ready");
    Ok(())
}

async fn create_table<E: EntityTrait>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(db.get_database_backend().build(&stmt)).await?;
    Ok(())
}
