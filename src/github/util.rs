//! GitHub API utilities

use crate::runtime::AsyncTask;
use log::info;
use std::future::Future;

/// Spawn an async task for a GitHub API operation.
#[inline]
pub fn spawn_task<T, F>(work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn_async(work)
}

/// Log an outgoing REST call.
pub(crate) fn log_request(method: &str, route: &str) {
    info!("Issuing request: {method} {route}");
}
