//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it into
//! `crate::errors::domain::DomainError` here, and handlers map
//! `DomainError` to `AppError` via `From`.

use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    let trace_id = trace_ctx::trace_id();

    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            warn!(trace_id = %trace_id, raw_error = %msg, "Foreign key constraint violation");
            return DomainError::conflict(
                ConflictKind::MissingReference,
                "Referenced record does not exist",
            );
        }
        _ => {}
    }

    match &e {
        DbErr::RecordNotFound(_) => {
            DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found")
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %e, "Database unavailable");
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
        }
        DbErr::Type(_) | DbErr::TryIntoErr { .. } => {
            error!(trace_id = %trace_id, raw_error = %e, "Stored row could not be decoded");
            DomainError::infra(InfraErrorKind::DataCorruption, "Stored data is invalid")
        }
        _ => {
            error!(trace_id = %trace_id, raw_error = %e, "Unhandled database error");
            DomainError::infra(
                InfraErrorKind::Other("DbErr".into()),
                "Database operation failed",
            )
        }
    }
}
