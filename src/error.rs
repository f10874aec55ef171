//! Error types for collaborative filtering operations.
//!
//! The recommendation core itself never fails: unknown users, empty rows and
//! too few qualifying items all resolve to well-defined degenerate outputs.
//! Errors only surface from configuration and from checked rating insertion.

use thiserror::Error;

use crate::ratings::{ItemId, UserId};

/// Main error type for aprender-collab operations.
///
/// # Examples
///
/// ```
/// use aprender_collab::error::CollabError;
///
/// let err = CollabError::InvalidHyperparameter {
///     param: "support".to_string(),
///     value: "0".to_string(),
///     constraint: ">= 1".to_string(),
/// };
/// assert!(err.to_string().contains("support"));
/// ```
#[derive(Debug, Error)]
pub enum CollabError {
    /// Invalid hyperparameter value provided.
    #[error("Invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A rating that is NaN or infinite was offered to a checked insert.
    #[error("Non-finite rating {rating} for user {user}, item {item}")]
    NonFiniteRating {
        /// User the rating belongs to
        user: UserId,
        /// Rated item
        item: ItemId,
        /// Offending value
        rating: f32,
    },

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CollabError {
    fn from(err: serde_json::Error) -> Self {
        CollabError::Config(err.to_string())
    }
}

impl CollabError {
    /// Create an invalid hyperparameter error
    #[must_use]
    pub fn invalid_hyperparameter(
        param: &str,
        value: impl ToString,
        constraint: &str,
    ) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, CollabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hyperparameter_display() {
        let err = CollabError::invalid_hyperparameter("like_threshold", f32::NAN, "finite");
        let msg = err.to_string();
        assert!(msg.contains("Invalid hyperparameter"));
        assert!(msg.contains("like_threshold"));
        assert!(msg.contains("NaN"));
        assert!(msg.contains("finite"));
    }

    #[test]
    fn test_non_finite_rating_display() {
        let err = CollabError::NonFiniteRating {
            user: 7,
            item: 42,
            rating: f32::INFINITY,
        };
        let msg = err.to_string();
        assert!(msg.contains("user 7"));
        assert!(msg.contains("item 42"));
        assert!(msg.contains("inf"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CollabError = parse_err.into();
        assert!(matches!(err, CollabError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CollabError>();
    }
}
