//! Error types for the task collection client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because a task can vanish between a
//! fetch and a mutation when another client deletes it. All other non-2xx
//! responses land in `HttpError` with the raw status code and body. The view
//! only ever shows the `Display` text; it does not branch on the variant.

use thiserror::Error;

/// Errors returned by `TaskClient` parse methods and `Transport`s.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// No response was obtained (connection, timeout, or body read failure).
    #[error("network error: {0}")]
    Transport(String),
}
