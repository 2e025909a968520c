//! Runtime module
//!
//! Task handles for work spawned off the calling future.

pub mod async_task;

pub use async_task::AsyncTask;
