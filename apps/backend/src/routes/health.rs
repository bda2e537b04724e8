use actix_web::{web, HttpResponse};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    engine: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    time: String,
}

fn engine_name(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Postgres => "postgresql",
        DatabaseBackend::Sqlite => "sqlite",
        _ => "other",
    }
}

/// Round-trip a trivial query.
async fn probe(db: &DatabaseConnection) -> Result<(), String> {
    db.query_one(Statement::from_string(
        db.get_database_backend(),
        "SELECT 1".to_owned(),
    ))
    .await
    .map(|_| ())
    .map_err(|e| format!("DB query failed: {e}"))
}

/// Always 200; database problems are reported in the body.
async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let (engine, db_error) = match require_db(&app_state) {
        Ok(db) => (
            Some(engine_name(db.get_database_backend())),
            probe(db).await.err(),
        ),
        Err(e) => (None, Some(format!("DB unavailable: {e}"))),
    };

    if let Some(err) = &db_error {
        tracing::warn!(error = %err, "health.db_error");
    }

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db: if db_error.is_none() { "ok" } else { "error" },
        engine,
        db_error,
        time: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_owned()),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
