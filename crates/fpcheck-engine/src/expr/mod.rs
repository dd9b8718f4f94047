//! The boolean condition language used by check profiles.
//!
//! A condition is a single expression over the fields of one
//! [`FlightPlan`], e.g.
//!
//! ```text
//! dep == 'EDDF' and sidwpt in ['TOBAK', 'ANEKI'] and rfl % 2000 == 0
//! ```
//!
//! Identifiers resolve against the flight plan at evaluation time; the
//! full variable set is documented on [`Expr::evaluate`]. Evaluation is
//! pure and synchronous — no rule data is fetched during a check.

mod lexer;
mod parser;

use std::fmt;

use fpcheck_models::FlightPlan;

pub use lexer::{LexError, Token};
pub use parser::{parse, ParseError};

// ---------------------------------------------------------------------------
// AST
// ---------------------------------------------------------------------------

/// A literal value of the condition language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// `true` / `false`.
    Bool(bool),
    /// Integer, e.g. an altitude in feet.
    Int(i64),
    /// Single-quoted text.
    Text(String),
}

/// Binary operators, in source syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `and`
    And,
    /// `or`
    Or,
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `>=`
    Ge,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `<`
    Lt,
    /// `%`
    Mod,
    /// `in` — list membership, or substring on two texts.
    In,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinOp::And => "and",
            BinOp::Or => "or",
            BinOp::Eq => "==",
            BinOp::Neq => "!=",
            BinOp::Ge => ">=",
            BinOp::Gt => ">",
            BinOp::Le => "<=",
            BinOp::Lt => "<",
            BinOp::Mod => "%",
            BinOp::In => "in",
        };
        f.write_str(s)
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    /// `!`
    Not,
}

/// A parsed condition expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value.
    Literal(Value),
    /// A flight-plan variable.
    Ident(String),
    /// A prefix operation.
    Unary(UnOp, Box<Expr>),
    /// An infix operation.
    Binary(BinOp, Box<Expr>, Box<Expr>),
    /// A bracketed list, the right-hand side of `in`.
    List(Vec<Expr>),
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Errors produced while evaluating a condition against a flight plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The condition references a variable the engine does not expose.
    #[error("unknown variable \"{0}\"")]
    UnknownIdent(String),

    /// An operator was applied to operand types it is not defined for.
    #[error("operator '{op}' is not defined for these operand types")]
    TypeMismatch {
        /// The offending operator.
        op: BinOp,
    },

    /// `!` applied to a non-boolean operand.
    #[error("'!' requires a boolean operand")]
    BadNegation,

    /// The right-hand side of `%` was zero.
    #[error("modulo by zero")]
    ModuloByZero,

    /// `%` overflowed (`i64::MIN % -1`).
    #[error("modulo overflow")]
    ModuloOverflow,

    /// The whole condition evaluated to something other than a boolean.
    #[error("condition did not evaluate to true or false")]
    NotACondition,
}

/// An evaluated (sub-)expression: a scalar value or a list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Term {
    Value(Value),
    List(Vec<Term>),
}

impl Expr {
    /// Evaluate this expression as a condition on one flight plan.
    ///
    /// Available variables:
    ///
    /// | Variable | Type | Meaning |
    /// |----------|------|---------|
    /// | `ac_type` | text | aircraft type code (`L`, `H`, …, `?`) |
    /// | `ac_wtc` | text | wake category code |
    /// | `ac_faa_equip_code` | text | FAA equipment letter |
    /// | `rnav` | bool | equipment is RNAV capable |
    /// | `ac_eng_type` | text | engine type code |
    /// | `ac_eng_count` | int | engine count |
    /// | `ac_is_rvsm_capable` | bool | RVSM certification |
    /// | `rule` | text | flight rule code (`V`, `I`, `Y`, `Z`) |
    /// | `cfl` | int | cleared altitude in feet |
    /// | `rfl` | int | filed altitude in feet |
    /// | `dep`, `dep_rwy`, `arr` | text | aerodromes and runway |
    /// | `sid`, `sidwpt` | text | SID name and its base waypoint |
    /// | `route` | text | filed route |
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] on unknown variables, operand type
    /// mismatches, or when the expression is not boolean-valued.
    pub fn evaluate(&self, plan: &FlightPlan) -> Result<bool, EvalError> {
        match eval_term(self, plan)? {
            Term::Value(Value::Bool(b)) => Ok(b),
            _ => Err(EvalError::NotACondition),
        }
    }
}

fn lookup(ident: &str, plan: &FlightPlan) -> Result<Value, EvalError> {
    let value = match ident {
        "ac_type" => Value::Text(plan.aircraft.aircraft_type.to_string()),
        "ac_wtc" => Value::Text(plan.aircraft.wake_category.to_string()),
        "ac_faa_equip_code" => Value::Text(plan.aircraft.equipment_code.to_string()),
        "rnav" => Value::Bool(plan.aircraft.equipment_code.is_rnav_capable()),
        "ac_eng_type" => Value::Text(plan.aircraft.engine_type.to_string()),
        "ac_eng_count" => Value::Int(i64::from(plan.aircraft.engine_count)),
        "ac_is_rvsm_capable" => Value::Bool(plan.aircraft.rvsm_capable),
        "rule" => Value::Text(plan.flight_rule.to_string()),
        "cfl" => Value::Int(i64::from(plan.cleared_altitude)),
        "rfl" => Value::Int(i64::from(plan.filed_altitude)),
        "dep" => Value::Text(plan.departure.clone()),
        "dep_rwy" => Value::Text(plan.departure_runway.clone()),
        "arr" => Value::Text(plan.arrival.clone()),
        "sid" => Value::Text(plan.sid.clone()),
        "sidwpt" => Value::Text(plan.sid_waypoint().to_string()),
        "route" => Value::Text(plan.route.clone()),
        other => return Err(EvalError::UnknownIdent(other.to_string())),
    };
    Ok(value)
}

fn eval_term(expr: &Expr, plan: &FlightPlan) -> Result<Term, EvalError> {
    match expr {
        Expr::Literal(value) => Ok(Term::Value(value.clone())),
        Expr::Ident(ident) => Ok(Term::Value(lookup(ident, plan)?)),
        Expr::List(items) => {
            let items = items
                .iter()
                .map(|item| eval_term(item, plan))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Term::List(items))
        }
        Expr::Unary(UnOp::Not, operand) => match eval_term(operand, plan)? {
            Term::Value(Value::Bool(b)) => Ok(Term::Value(Value::Bool(!b))),
            _ => Err(EvalError::BadNegation),
        },
        Expr::Binary(op, lhs, rhs) => {
            let lhs = eval_term(lhs, plan)?;
            let rhs = eval_term(rhs, plan)?;
            apply(*op, lhs, rhs)
        }
    }
}

fn apply(op: BinOp, lhs: Term, rhs: Term) -> Result<Term, EvalError> {
    use Value::{Bool, Int, Text};

    let term = match (op, lhs, rhs) {
        (BinOp::And, Term::Value(Bool(a)), Term::Value(Bool(b))) => Term::Value(Bool(a && b)),
        (BinOp::Or, Term::Value(Bool(a)), Term::Value(Bool(b))) => Term::Value(Bool(a || b)),

        // Equality is structural over any pair of terms.
        (BinOp::Eq, lhs, rhs) => Term::Value(Bool(lhs == rhs)),
        (BinOp::Neq, lhs, rhs) => Term::Value(Bool(lhs != rhs)),

        (BinOp::Lt, Term::Value(Int(a)), Term::Value(Int(b))) => Term::Value(Bool(a < b)),
        (BinOp::Le, Term::Value(Int(a)), Term::Value(Int(b))) => Term::Value(Bool(a <= b)),
        (BinOp::Gt, Term::Value(Int(a)), Term::Value(Int(b))) => Term::Value(Bool(a > b)),
        (BinOp::Ge, Term::Value(Int(a)), Term::Value(Int(b))) => Term::Value(Bool(a >= b)),

        (BinOp::Mod, Term::Value(Int(_)), Term::Value(Int(0))) => {
            return Err(EvalError::ModuloByZero)
        }
        // checked_rem: i64::MIN % -1 overflows.
        (BinOp::Mod, Term::Value(Int(a)), Term::Value(Int(b))) => Term::Value(Int(
            a.checked_rem(b).ok_or(EvalError::ModuloOverflow)?,
        )),

        // `x in [..]` is membership, `'a' in 'abc'` is substring.
        (BinOp::In, item, Term::List(items)) => Term::Value(Bool(items.contains(&item))),
        (BinOp::In, Term::Value(Text(needle)), Term::Value(Text(hay))) => {
            Term::Value(Bool(hay.contains(&needle)))
        }

        (op, _, _) => return Err(EvalError::TypeMismatch { op }),
    };
    Ok(term)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use fpcheck_models::{
        Aircraft, AircraftType, EngineType, FaaEquipmentCode, FlightRule, WakeCategory,
    };

    fn plan() -> FlightPlan {
        FlightPlan {
            aircraft: Aircraft {
                aircraft_type: AircraftType::Landplane,
                wake_category: WakeCategory::Medium,
                equipment_code: FaaEquipmentCode::Q,
                engine_type: EngineType::Jet,
                engine_count: 2,
                rvsm_capable: true,
            },
            flight_rule: FlightRule::Ifr,
            cleared_altitude: 4000,
            filed_altitude: 35000,
            departure: "EDDF".into(),
            departure_runway: "18".into(),
            arrival: "EDDM".into(),
            sid: "CINDY4S".into(),
            route: "CINDY Z74 HAREM T104 ROKIL".into(),
        }
    }

    fn eval(input: &str) -> Result<bool, EvalError> {
        parse(input).unwrap().evaluate(&plan())
    }

    #[test]
    fn boolean_basics() {
        assert_eq!(eval("!(false == true)"), Ok(true));
        assert_eq!(eval("true and false"), Ok(false));
        assert_eq!(eval("true or false"), Ok(true));
    }

    #[test]
    fn negating_an_int_fails() {
        assert_eq!(eval("!42"), Err(EvalError::BadNegation));
    }

    #[test]
    fn int_comparisons() {
        assert_eq!(eval("rfl <= 35000"), Ok(true));
        assert_eq!(eval("rfl <= 34999"), Ok(false));
        assert_eq!(eval("cfl < 5000 and rfl > 10000"), Ok(true));
    }

    #[test]
    fn modulo() {
        assert_eq!(eval("rfl % 2000 == 1000"), Ok(true));
        assert_eq!(eval("rfl % 2000 == 0"), Ok(false));
        assert_eq!(eval("rfl % 0 == 0"), Err(EvalError::ModuloByZero));
    }

    #[test]
    fn modulo_overflow_is_an_error_not_a_panic() {
        assert_eq!(
            eval("-9223372036854775808 % -1 == 0"),
            Err(EvalError::ModuloOverflow)
        );
    }

    #[test]
    fn membership_in_list() {
        assert_eq!(eval("sidwpt in ['ANEKI', 'CINDY']"), Ok(true));
        assert_eq!(eval("sidwpt in ['ANEKI', 'TOBAK']"), Ok(false));
    }

    #[test]
    fn substring_in_text() {
        assert_eq!(eval("'Z74 HAREM' in route"), Ok(true));
        assert_eq!(eval("'Z10' in route"), Ok(false));
    }

    #[test]
    fn aircraft_variables() {
        assert_eq!(eval("ac_type == 'L'"), Ok(true));
        assert_eq!(eval("ac_wtc == 'M'"), Ok(true));
        assert_eq!(eval("ac_faa_equip_code == 'Q'"), Ok(true));
        assert_eq!(eval("rnav"), Ok(true));
        assert_eq!(eval("ac_eng_type == 'J'"), Ok(true));
        assert_eq!(eval("ac_eng_count == 2"), Ok(true));
        assert_eq!(eval("ac_is_rvsm_capable"), Ok(true));
    }

    #[test]
    fn plan_variables() {
        assert_eq!(eval("rule == 'I'"), Ok(true));
        assert_eq!(eval("dep == 'EDDF' and arr == 'EDDM'"), Ok(true));
        assert_eq!(eval("dep_rwy == '18'"), Ok(true));
        assert_eq!(eval("sid == 'CINDY4S' and sidwpt == 'CINDY'"), Ok(true));
    }

    #[test]
    fn unknown_variable() {
        assert_eq!(
            eval("altitude == 1"),
            Err(EvalError::UnknownIdent("altitude".into()))
        );
    }

    #[test]
    fn non_boolean_condition() {
        assert_eq!(eval("rfl"), Err(EvalError::NotACondition));
        assert_eq!(eval("rfl % 2000"), Err(EvalError::NotACondition));
    }

    #[test]
    fn type_mismatch_reports_operator() {
        assert_eq!(
            eval("dep < 5"),
            Err(EvalError::TypeMismatch { op: BinOp::Lt })
        );
        assert_eq!(
            eval("true and 5"),
            Err(EvalError::TypeMismatch { op: BinOp::And })
        );
    }
}
