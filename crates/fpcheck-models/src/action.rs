//! The check result: a severity-ranked, display-budgeted diagnostic.
//!
//! The consuming UI surface is a single 16-character tag cell, so a check
//! always reduces to exactly one [`Action`] whose message fits the
//! 15-displayable-character budget plus terminator.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Diagnostic severity, totally ordered: `Error > Warning > Info > Success`.
///
/// The explicit discriminants fix the derived `Ord` so that the reduction
/// in the evaluator can never drift; the engine guarantees a severity is
/// always one of these four.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// No rule fired — the plan passed every check.
    Success = 0,
    /// Informational note, e.g. an empty route on an IFR plan.
    Info = 1,
    /// The plan is suspect and worth a controller's look.
    Warning = 2,
    /// The plan violates a hard constraint.
    Error = 3,
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Display budget for an [`Action`] message — a 16-byte tag cell minus
/// the terminator.
pub const MAX_MESSAGE_LEN: usize = 15;

/// The engine's sole output: one severity plus a short display message.
///
/// Invariants: the message is never empty and never exceeds
/// [`MAX_MESSAGE_LEN`] displayable characters (enforced by truncation at
/// construction).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Diagnostic severity.
    pub severity: Severity,
    /// Display message, at most [`MAX_MESSAGE_LEN`] characters.
    pub message: String,
}

impl Action {
    /// Create an action, truncating the message to the display budget.
    ///
    /// Callers must pass a non-empty message; rule messages are short
    /// fixed codes, profile messages are validated at load time.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        let mut message: String = message.into();
        debug_assert!(!message.is_empty(), "action message must not be empty");
        if message.chars().count() > MAX_MESSAGE_LEN {
            message = message.chars().take(MAX_MESSAGE_LEN).collect();
        }
        Self { severity, message }
    }

    /// The synthetic success action returned when no rule fires.
    pub fn ok() -> Self {
        Self::new(Severity::Success, "OK")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn severity_ordering_is_total_and_fixed() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
        assert!(Severity::Info > Severity::Success);
        assert_eq!(Severity::Error.max(Severity::Info), Severity::Error);

        // Declaration order is ascending severity.
        for pair in Severity::iter().collect::<Vec<_>>().windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
        for severity in Severity::iter() {
            let json = serde_json::to_string(&severity).unwrap();
            assert_eq!(json, format!("\"{severity}\""));
            let back: Severity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, severity);
        }
    }

    #[test]
    fn severity_display_lowercase() {
        assert_eq!(Severity::Success.to_string(), "success");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn action_ok_is_fixed() {
        let ok = Action::ok();
        assert_eq!(ok.severity, Severity::Success);
        assert_eq!(ok.message, "OK");
    }

    #[test]
    fn action_message_fits_display_budget() {
        let action = Action::new(Severity::Warning, "A MESSAGE FAR TOO LONG FOR A TAG");
        assert_eq!(action.message.chars().count(), MAX_MESSAGE_LEN);
        assert_eq!(action.message, "A MESSAGE FAR T");
    }

    #[test]
    fn action_short_message_untouched() {
        let action = Action::new(Severity::Error, "RVSM");
        assert_eq!(action.message, "RVSM");
    }
}
