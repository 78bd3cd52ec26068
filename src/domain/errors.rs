//! Domain errors for the relief board.

use thiserror::Error;

use crate::domain::ports::ApiError;

/// Errors returned by a collection sync controller.
///
/// By the time a caller sees one of these, the failure has already been
/// surfaced in the kind's display region.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to load {kind}: {source}")]
    LoadFailed {
        kind: &'static str,
        #[source]
        source: ApiError,
    },

    #[error("Failed to submit {kind}: {source}")]
    SubmitFailed {
        kind: &'static str,
        #[source]
        source: ApiError,
    },

    #[error("Failed to encode {kind} payload: {source}")]
    Encode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl SyncError {
    /// The record kind the failure belongs to.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LoadFailed { kind, .. }
            | Self::SubmitFailed { kind, .. }
            | Self::Encode { kind, .. } => kind,
        }
    }

    /// True for read-path failures.
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::LoadFailed { .. })
    }
}

pub type SyncResult<T> = Result<T, SyncError>;
