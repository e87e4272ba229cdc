//! Tracing utilities for query construction observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with the resource name and parameter count.
///
/// Options and criteria of the same resource report the same name.
///
/// ```ignore
/// restcriteria_trace_query!("Application", params.len());
/// ```
#[macro_export]
macro_rules! restcriteria_trace_query {
    ($resource:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            resource = $resource,
            params = $param_count,
            "restcriteria.query"
        );
    };
}

/// Emit a debug-level tracing event when a serialized query is handed to a transport.
///
/// ```ignore
/// restcriteria_trace_request!("/applications", &query_string);
/// ```
#[macro_export]
macro_rules! restcriteria_trace_request {
    ($path:expr, $query:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(path = $path, query = %$query, "restcriteria.request");
    };
}
