use tracing::info;

use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::infra::schema::create_schema;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_kind: Option<DbKind>,
    create_schema: bool,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_kind: None,
            create_schema: false,
        }
    }

    /// Connect to a database of the given kind on build.
    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    /// Create missing tables on build. In-memory SQLite starts empty and
    /// always gets its tables, whatever this is set to.
    pub fn with_schema(mut self, create_schema: bool) -> Self {
        self.create_schema = create_schema;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let Some(kind) = self.db_kind else {
            return Ok(AppState::without_db());
        };

        let conn = connect_db(kind).await?;
        if self.create_schema || kind == DbKind::SqliteMemory {
            create_schema(&conn).await?;
            info!(?kind, "tables created if missing");
        }
        Ok(AppState::new(conn))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
