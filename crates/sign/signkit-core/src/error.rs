//! Error types for the sign sequencing core.

use serde::{Deserialize, Serialize};

/// Errors surfaced by sessions, loaders and persistence.
///
/// Sign resolution and per-target stepping never fail; they fall back or skip
/// instead. Everything here is local and recoverable.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SignError {
    /// Model asset missing or malformed
    #[error("Failed to load model '{path}': {reason}")]
    ModelLoad { path: String, reason: String },

    /// Rejected sequencer configuration
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A sign was requested while another one is still playing
    #[error("Animation in progress, please wait")]
    Busy,

    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    /// Key/value storage failure
    #[error("Storage error: {reason}")]
    Storage { reason: String },
}

impl SignError {
    pub fn model_load(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::ModelLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for SignError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
