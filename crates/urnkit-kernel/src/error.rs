//! Error types for urnkit engine operations.

use crate::kind::UrnKind;

/// Errors arising from invalid configurations, ordinals, or draws.
///
/// All errors are raised synchronously at the call that caused them;
/// the engine has no internal recovery path and never terminates the
/// process.
#[derive(Debug, thiserror::Error)]
pub enum UrnError {
    /// `(n, k)` violates the kind's construction rule.
    #[error("{kind} with {reason} is not valid")]
    InvalidConfiguration { kind: UrnKind, reason: String },

    /// No draw exists at the requested ordinal.
    #[error("there is no draw for ordinal {ordinal} (count is {count})")]
    OutOfRange { ordinal: i64, count: u64 },

    /// The base odometer is already at the maximal tuple.
    #[error("there is no next draw")]
    OverflowAtEnd,

    /// The base odometer is already at the all-zero tuple.
    #[error("there is no previous draw")]
    UnderflowAtStart,

    /// A draw is not a member of the urn, or has no neighbor in the
    /// urn's order.
    #[error("invalid draw: {reason}")]
    InvalidDraw { reason: String },
}

impl UrnError {
    pub(crate) fn invalid_draw(reason: impl Into<String>) -> Self {
        Self::InvalidDraw {
            reason: reason.into(),
        }
    }
}
