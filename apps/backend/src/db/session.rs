//! Per-request database session.
//!
//! A session is a unit of work on the shared pool. It is opened by a handler,
//! handed to repo functions, and always released before the handler returns:
//! committed when the closure succeeds, rolled back when it fails, and rolled
//! back on drop if the request future is cancelled mid-flight.

use futures_util::future::LocalBoxFuture;
use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::{debug, warn};

use super::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Run `f` inside a fresh session and release it on every exit path.
pub async fn with_session<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'s> FnOnce(&'s DatabaseTransaction) -> LocalBoxFuture<'s, Result<R, AppError>>,
{
    let db = require_db(state)?;
    let session = db.begin().await?;
    debug!("session opened");

    let out = f(&session).await;

    match out {
        Ok(val) => {
            session.commit().await?;
            debug!("session committed");
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            if let Err(rollback_err) = session.rollback().await {
                warn!(error = %rollback_err, "session rollback failed");
            }
            Err(err)
        }
    }
}
