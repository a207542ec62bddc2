use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by selection operations. Resolution failures are local
/// and non-fatal: callers ignore the tap and keep the picker open.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionError {
    #[error("no time zone resolvable from {key:?}")]
    NotFound { key: String },
}

impl SelectionError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }
}
