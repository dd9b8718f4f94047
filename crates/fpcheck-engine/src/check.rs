//! The [`Rule`] trait, the ordered [`RuleSet`] and the reduction from
//! many diagnostics to one [`Action`].
//!
//! Rules are independent: none observes another's output, and the
//! registration order matters only for the tie-break below — never for
//! correctness or short-circuiting.

use fpcheck_models::{Action, FlightPlan};
use tracing::debug;

use crate::rules::{EquipmentRule, RouteRule, RvsmRule, SidAltitudeRule, VfrAltitudeRule};

/// One independent validation rule.
///
/// A rule is a pure predicate over a normalized flight plan: it either
/// produces one diagnostic or stays silent. It must not block, perform
/// I/O, or depend on anything but the plan and its own pre-loaded data —
/// the engine may be re-invoked once per radar refresh per visible plan,
/// concurrently for different plans (hence `Send + Sync`).
pub trait Rule: Send + Sync {
    /// Stable rule name, used for logging only.
    fn name(&self) -> &str;

    /// Inspect the plan; `None` means the rule has nothing to report.
    fn check(&self, plan: &FlightPlan) -> Option<Action>;
}

/// An ordered collection of rules and the evaluator over them.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// An empty rule set. [`evaluate`](Self::evaluate) on it always
    /// returns [`Action::ok`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in rules in their fixed registration order:
    /// RVSM, equipment, SID altitude, route sanity, VFR altitude band.
    pub fn standard() -> Self {
        let mut set = Self::new();
        set.register(RvsmRule);
        set.register(EquipmentRule);
        set.register(SidAltitudeRule::default());
        set.register(RouteRule);
        set.register(VfrAltitudeRule);
        set
    }

    /// Append a rule. Registration order is the tie-break order.
    pub fn register(&mut self, rule: impl Rule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule and reduce the fired diagnostics to one [`Action`].
    ///
    /// The diagnostic with the highest severity wins; at equal severity
    /// the earliest-registered rule wins. When nothing fires the result
    /// is the fixed [`Action::ok`]. Total — this can never fail for a
    /// normalized plan.
    pub fn evaluate(&self, plan: &FlightPlan) -> Action {
        let mut verdict: Option<Action> = None;
        for rule in &self.rules {
            let Some(diagnostic) = rule.check(plan) else {
                continue;
            };
            debug!(
                rule = rule.name(),
                severity = %diagnostic.severity,
                message = %diagnostic.message,
                "rule fired"
            );
            // Only a strictly higher severity may displace the current
            // diagnostic, so the first rule at the maximum severity wins.
            let outranked = verdict
                .as_ref()
                .is_some_and(|v| v.severity >= diagnostic.severity);
            if !outranked {
                verdict = Some(diagnostic);
            }
        }
        verdict.unwrap_or_else(Action::ok)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
