//! Error types for the `fpcheck-models` crate.
//!
//! Normalization of a raw flight plan is total for every field except the
//! flight rule, so [`ModelError`] is deliberately small: it only covers
//! input that cannot be represented at all.

/// Errors produced when normalizing raw flight-plan fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A flight-rule code was outside the closed set `V`, `I`, `Y`, `Z`.
    ///
    /// A flight plan without a recognizable flight rule cannot be checked
    /// at all, so this is a hard error rather than an `Unknown` fallback.
    #[error("invalid flight rule \"{value}\": must be one of V, I, Y, Z")]
    InvalidFlightRule {
        /// The raw value that failed normalization.
        value: String,
    },
}
