//! Declarative check profiles.
//!
//! A profile is a JSON document of aerodrome-specific rules, each pairing
//! a condition in the [`expr`](crate::expr) language with the diagnostic
//! to raise when the condition holds:
//!
//! ```json
//! {
//!   "rules": [
//!     {
//!       "name": "eddf-aneki-rfl",
//!       "condition": "dep == 'EDDF' and sidwpt == 'ANEKI' and rfl % 2000 == 0",
//!       "severity": "error",
//!       "message": "RFL"
//!     }
//!   ]
//! }
//! ```
//!
//! Conditions are parsed during deserialization, so a malformed profile
//! is rejected at load time — never mid-check.

use serde::{Deserialize, Deserializer};
use tracing::warn;

use fpcheck_models::{Action, FlightPlan, Severity, MAX_MESSAGE_LEN};

use crate::check::{Rule, RuleSet};
use crate::expr::{self, Expr};

// ---------------------------------------------------------------------------
// ProfileError
// ---------------------------------------------------------------------------

/// Errors produced while loading a check profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The document is not valid JSON, or a condition failed to parse.
    #[error("invalid profile: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule message is empty — the tag cell must never be blank.
    #[error("rule \"{rule}\" has an empty message")]
    EmptyMessage {
        /// Name of the offending rule.
        rule: String,
    },

    /// A rule message exceeds the tag display budget.
    #[error("rule \"{rule}\" message exceeds {MAX_MESSAGE_LEN} characters")]
    MessageTooLong {
        /// Name of the offending rule.
        rule: String,
    },
}

// ---------------------------------------------------------------------------
// Profile / ProfileRule
// ---------------------------------------------------------------------------

/// A set of condition-driven rules loaded from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    /// The rules, in file order — which becomes registration order.
    pub rules: Vec<ProfileRule>,
}

/// One condition-driven rule.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRule {
    /// Rule name, used for logging.
    pub name: String,
    /// When this condition holds, the rule fires.
    #[serde(deserialize_with = "deserialize_condition")]
    pub condition: Expr,
    /// Severity of the raised diagnostic.
    pub severity: Severity,
    /// Tag message, 1–15 characters.
    pub message: String,
}

fn deserialize_condition<'de, D>(deserializer: D) -> Result<Expr, D::Error>
where
    D: Deserializer<'de>,
{
    let source = String::deserialize(deserializer)?;
    expr::parse(&source).map_err(serde::de::Error::custom)
}

impl Profile {
    /// Parse and validate a profile document.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] for malformed JSON, unparseable
    /// conditions, or messages outside the display budget.
    pub fn from_json(input: &str) -> Result<Self, ProfileError> {
        let profile: Profile = serde_json::from_str(input)?;
        for rule in &profile.rules {
            if rule.message.is_empty() {
                return Err(ProfileError::EmptyMessage {
                    rule: rule.name.clone(),
                });
            }
            if rule.message.chars().count() > MAX_MESSAGE_LEN {
                return Err(ProfileError::MessageTooLong {
                    rule: rule.name.clone(),
                });
            }
        }
        Ok(profile)
    }
}

impl Rule for ProfileRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, plan: &FlightPlan) -> Option<Action> {
        match self.condition.evaluate(plan) {
            Ok(true) => Some(Action::new(self.severity, self.message.clone())),
            Ok(false) => None,
            // A condition that cannot be evaluated against this plan is
            // degraded data, not a check failure: skip the rule.
            Err(err) => {
                warn!(rule = %self.name, error = %err, "condition not evaluable, rule skipped");
                None
            }
        }
    }
}

impl RuleSet {
    /// Register every rule of a profile, preserving file order.
    pub fn register_profile(&mut self, profile: Profile) {
        for rule in profile.rules {
            self.register(rule);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use fpcheck_models::FlightRule;

    fn profile(json: &str) -> Profile {
        Profile::from_json(json).unwrap()
    }

    #[test]
    fn loads_and_fires() {
        let profile = profile(
            r#"{"rules": [{
                "name": "high-ifr",
                "condition": "rule == 'I' and rfl >= 30000",
                "severity": "warning",
                "message": "HI"
            }]}"#,
        );
        let rule = &profile.rules[0];

        let plan = FlightPlan {
            flight_rule: FlightRule::Ifr,
            filed_altitude: 35000,
            ..FlightPlan::default()
        };
        assert_eq!(rule.check(&plan), Some(Action::new(Severity::Warning, "HI")));

        let low = FlightPlan {
            filed_altitude: 9000,
            ..plan
        };
        assert_eq!(rule.check(&low), None);
    }

    #[test]
    fn bad_condition_rejected_at_load() {
        let err = Profile::from_json(
            r#"{"rules": [{
                "name": "broken",
                "condition": "rfl == ",
                "severity": "error",
                "message": "X"
            }]}"#,
        );
        assert!(matches!(err, Err(ProfileError::Json(_))));
    }

    #[test]
    fn bad_severity_rejected_at_load() {
        let err = Profile::from_json(
            r#"{"rules": [{
                "name": "broken",
                "condition": "true",
                "severity": "fatal",
                "message": "X"
            }]}"#,
        );
        assert!(matches!(err, Err(ProfileError::Json(_))));
    }

    #[test]
    fn empty_message_rejected() {
        let err = Profile::from_json(
            r#"{"rules": [{
                "name": "blank",
                "condition": "true",
                "severity": "info",
                "message": ""
            }]}"#,
        );
        assert!(matches!(err, Err(ProfileError::EmptyMessage { .. })));
    }

    #[test]
    fn oversized_message_rejected() {
        let err = Profile::from_json(
            r#"{"rules": [{
                "name": "wordy",
                "condition": "true",
                "severity": "info",
                "message": "THIS DOES NOT FIT A TAG"
            }]}"#,
        );
        assert!(matches!(err, Err(ProfileError::MessageTooLong { .. })));
    }

    #[test]
    fn unevaluable_condition_skips_rule() {
        // `dep < 5` is a type mismatch at evaluation time; the rule is
        // skipped rather than failing the check.
        let profile = profile(
            r#"{"rules": [{
                "name": "mismatched",
                "condition": "dep < 5",
                "severity": "error",
                "message": "X"
            }]}"#,
        );
        assert_eq!(profile.rules[0].check(&FlightPlan::default()), None);
    }

    #[test]
    fn overflowing_condition_skips_rule() {
        // i64::MIN % -1 overflows at evaluation time; like any other
        // non-evaluable condition the rule is skipped, never a panic.
        let profile = profile(
            r#"{"rules": [{
                "name": "overflowing",
                "condition": "-9223372036854775808 % -1 == 0",
                "severity": "error",
                "message": "X"
            }]}"#,
        );
        let mut set = RuleSet::new();
        set.register_profile(profile);
        assert_eq!(set.evaluate(&FlightPlan::default()), Action::ok());
    }

    #[test]
    fn register_profile_preserves_order() {
        let profile = profile(
            r#"{"rules": [
                {"name": "a", "condition": "true", "severity": "warning", "message": "A"},
                {"name": "b", "condition": "true", "severity": "warning", "message": "B"}
            ]}"#,
        );
        let mut set = RuleSet::new();
        set.register_profile(profile);
        assert_eq!(set.len(), 2);
        // Equal severity: the first rule in file order wins.
        assert_eq!(set.evaluate(&FlightPlan::default()).message, "A");
    }
}
