//! Domain error types
//!
//! These errors are framework-agnostic and represent recommendation failures.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The title is unknown both locally and to the external lookup
    NotFound,
    /// Validation error with message
    Validation(String),
    /// Generic internal error
    Internal(String),
}

/// Detail sent to clients when no recommendation can be produced
pub const NOT_FOUND_DETAIL: &str =
    "Haven't heard of that one! Sorry can't give any recommendations.";

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "{}", NOT_FOUND_DETAIL),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<csv::Error> for DomainError {
    fn from(e: csv::Error) -> Self {
        DomainError::Internal(format!("catalog: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_client_detail() {
        assert_eq!(DomainError::NotFound.to_string(), NOT_FOUND_DETAIL);
    }

    #[test]
    fn csv_errors_become_internal() {
        let err = csv::Reader::from_reader("a,b\n1,2,3\n".as_bytes())
            .records()
            .find_map(Result::err)
            .map(DomainError::from);
        assert!(matches!(err, Some(DomainError::Internal(_))));
    }
}
