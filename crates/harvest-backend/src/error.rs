//! # Backend Error Types
//!
//! Only payloads that cannot be read at all fail. Bad fields inside a
//! readable payload are coerced by the adapters instead.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Backend Error Categories                          │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────────┐ │
//! │  │  Json                        │  │  UnexpectedShape                 │ │
//! │  │  top-level syntax error      │  │  valid JSON, wrong kind of value │ │
//! │  └──────────────────────────────┘  └──────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for adapter operations.
pub type BackendResult<T> = Result<T, BackendError>;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The payload is not valid JSON.
    #[error("Malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed but is not the kind of value this entity needs.
    #[error("Unexpected {entity} payload: expected {expected}")]
    UnexpectedShape {
        entity: &'static str,
        expected: &'static str,
    },
}
