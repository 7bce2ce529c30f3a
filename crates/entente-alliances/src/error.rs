//! Error types for the entente-alliances crate.
//!
//! Registry queries never fail. Only the aggregations built on top of the
//! registry (statistics and victory tallies) can, and only on overflow.

/// Errors raised while aggregating per-player values across alliances.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllianceError {
    /// A checked sum overflowed.
    #[error("arithmetic overflow: {context}")]
    ArithmeticOverflow {
        /// Description of what was being summed.
        context: String,
    },
}
