//! Task-local trace id for the request currently being served.
//!
//! `RequestTrace` opens the scope; error rendering and database error
//! mapping read it so logs and Problem Details share one id.

use tokio::task_local;

/// Returned when no request scope is active (startup, background work, unit tests).
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current task, or [`UNKNOWN_TRACE_ID`].
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` visible to [`trace_id()`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

/// Run the synchronous `f` with `trace_id` visible, e.g. a downstream
/// `Service::call` that builds its future eagerly.
pub fn with_trace_id_sync<F, R>(trace_id: String, f: F) -> R
where
    F: FnOnce() -> R,
{
    TRACE_ID.sync_scope(trace_id, f)
}
