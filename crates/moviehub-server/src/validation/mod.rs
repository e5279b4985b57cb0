//! Rule-based request validation and error normalization.
//!
//! Every validated request type exposes a rule table through [`Constrained`]:
//! a list of [`Constraint`]s, each pairing a field with its current value and
//! the [`Rule`]s that value must satisfy. [`evaluate`] runs the whole table
//! without short-circuiting and records one [`ValidationError`] per violation
//! in a [`ValidationErrors`] container. [`normalize`] turns that container
//! back into the single, deterministic message returned to clients.
//!
//! [`ValidationError`]: validator::ValidationError

mod normalize;
mod rule;

use validator::ValidationErrors;

pub use self::normalize::normalize;
pub use self::rule::{FieldValue, Rule};

/// Tracing target for validation.
pub const TRACING_TARGET: &str = "moviehub_server::validation";

/// A field, its current value and the rules the value must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint<'a> {
    /// Wire name of the field.
    pub field: &'static str,
    /// Borrowed field value.
    pub value: FieldValue<'a>,
    /// Rules evaluated against the value, in order.
    pub rules: &'static [Rule],
}

impl<'a> Constraint<'a> {
    /// Creates a new constraint entry.
    #[inline]
    pub fn new(
        field: &'static str,
        value: impl Into<FieldValue<'a>>,
        rules: &'static [Rule],
    ) -> Self {
        Self {
            field,
            value: value.into(),
            rules,
        }
    }
}

/// A request type with an inspectable rule table.
pub trait Constrained {
    /// Separator placed between messages when violations are joined.
    const SEPARATOR: &'static str;

    /// Returns the rule table for the current value.
    fn constraints(&self) -> Vec<Constraint<'_>>;
}

/// Evaluates every rule of every constraint.
///
/// Returns `Ok(())` when no rule is violated; otherwise all violations are
/// recorded under their field name, one error per violation.
pub fn evaluate<T>(resource: &T) -> Result<(), ValidationErrors>
where
    T: Constrained + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for constraint in resource.constraints() {
        for rule in constraint.rules {
            for _ in 0..rule.violations(&constraint.value) {
                errors.add(constraint.field, rule.to_error());
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
