//! Conversion error types
//!
//! Every fallible domain/wire conversion returns [`ConversionError`].
//! Collaborator failures (transport, credentials) are wrapped with
//! `anyhow::Context` at the call site instead and never retried here.

use thiserror::Error;

/// Failure of a domain/wire conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A source collection had more elements than the bounded
    /// destination can hold. The context names the offending
    /// collection so the failure is attributable.
    #[error("received {context} count exceeds application limit")]
    CapacityExceeded { context: String },

    /// A wire field could not be mapped into its domain counterpart.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// The operation is intentionally not implemented at this layer.
    #[error("operation is not supported")]
    NotSupported,
}

impl ConversionError {
    /// Overflow error carrying the label of the oversized collection.
    pub fn capacity_exceeded(context: impl Into<String>) -> Self {
        Self::CapacityExceeded {
            context: context.into(),
        }
    }

    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
