use std::borrow::Cow;

use strum::{AsRefStr, EnumIter, IntoStaticStr};
use validator::ValidationError;

/// A single validation rule.
///
/// The rule code (`not_blank`, `greater_than_zero`, ...) becomes the
/// [`ValidationError::code`] and [`Rule::message`] its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    /// Text is present and has at least one non-whitespace character.
    NotBlank,
    /// Every element of a text list is not blank.
    NotBlankElements,
    /// Number is strictly positive.
    GreaterThanZero,
    /// Number is zero or positive.
    NotNegative,
}

impl Rule {
    /// Returns the human-readable violation message.
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotBlank | Self::NotBlankElements => "must not be blank",
            Self::GreaterThanZero => "must be greater than 0",
            Self::NotNegative => "must be greater than or equal to 0",
        }
    }

    /// Returns how many times `value` violates this rule.
    ///
    /// List rules report one violation per offending element. A rule applied
    /// to a value of a kind it does not constrain is never violated.
    pub fn violations(self, value: &FieldValue<'_>) -> usize {
        match (self, value) {
            (Self::NotBlank, FieldValue::Text(text)) => usize::from(is_blank(*text)),
            (Self::NotBlankElements, FieldValue::TextList(items)) => items
                .iter()
                .filter(|item| is_blank(Some(item.as_str())))
                .count(),
            (Self::GreaterThanZero, FieldValue::Integer(n)) => usize::from(*n <= 0),
            (Self::GreaterThanZero, FieldValue::Number(n)) => usize::from(n.is_nan() || *n <= 0.0),
            (Self::NotNegative, FieldValue::Integer(n)) => usize::from(*n < 0),
            (Self::NotNegative, FieldValue::Number(n)) => usize::from(n.is_nan() || *n < 0.0),
            _ => 0,
        }
    }

    /// Builds the error recorded for a single violation.
    pub fn to_error(self) -> ValidationError {
        let mut error = ValidationError::new(self.into());
        error.message = Some(Cow::Borrowed(self.message()));
        error
    }
}

/// Borrowed value of a constrained field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Optional text.
    Text(Option<&'a str>),
    /// List of text elements.
    TextList(&'a [String]),
    /// Whole number.
    Integer(i64),
    /// Floating point number.
    Number(f64),
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Some(value))
    }
}

impl<'a> From<&'a [String]> for FieldValue<'a> {
    fn from(value: &'a [String]) -> Self {
        Self::TextList(value)
    }
}

impl From<i32> for FieldValue<'_> {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Absent, empty and whitespace-only text is blank.
fn is_blank(text: Option<&str>) -> bool {
    text.is_none_or(|text| text.trim().is_empty())
}
