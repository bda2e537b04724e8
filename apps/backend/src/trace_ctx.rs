//! Task-local trace context for web requests.
//!
//! `RequestTrace` opens the scope for each request; error responses and
//! log events read the id from here without threading it through handlers.

use std::future::Future;

use tokio::task_local;

/// Placeholder used when no request scope is active.
pub const NO_TRACE: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, or [`NO_TRACE`] outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| NO_TRACE.to_owned())
}

/// Run `future` with `trace_id` as the current trace id.
pub async fn with_trace_id<F: Future>(trace_id: String, future: F) -> F::Output {
    TRACE_ID.scope(trace_id, future).await
}
