//! Validation failure to HTTP error conversion.

use validator::ValidationErrors;

use crate::handler::{Error, ErrorKind};
use crate::validation::{self, Constrained};

impl Error<'static> {
    /// Creates a `400 Bad Request` error whose message is the normalized
    /// violation list of `T`.
    pub fn from_violations<T>(errors: &ValidationErrors) -> Self
    where
        T: Constrained + ?Sized,
    {
        let message = validation::normalize(errors, T::SEPARATOR);

        tracing::info!(
            target: validation::TRACING_TARGET,
            violations = %message,
            "Request validation failed"
        );

        ErrorKind::BadRequest
            .with_message(message)
            .with_resource("request")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Constraint, Rule, evaluate};

    struct Rating(f64);

    impl Constrained for Rating {
        const SEPARATOR: &'static str = ", ";

        fn constraints(&self) -> Vec<Constraint<'_>> {
            vec![
                Constraint::new("movieInfoId", None::<&str>, &[Rule::NotBlank]),
                Constraint::new("rating", self.0, &[Rule::NotNegative]),
            ]
        }
    }

    #[test]
    fn violations_become_bad_request() {
        let errors = evaluate(&Rating(-1.0)).unwrap_err();
        let error = Error::from_violations::<Rating>(&errors);

        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(
            error.message(),
            Some("must be greater than or equal to 0, must not be blank")
        );
    }
}
