use thiserror::Error;

/// A required connection is not present in an adjacency set.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{message}")]
pub struct ElementNotFoundError {
    message: String,
}

impl ElementNotFoundError {
    /// Construct the error from a message describing the missing element.
    pub fn new(message: impl Into<String>) -> Self {
        ElementNotFoundError {
            message: message.into(),
        }
    }

    /// The error for removing a connection that does not exist.
    pub(crate) fn connection() -> Self {
        ElementNotFoundError::new("non-existent connection.")
    }

    /// Get the message describing the missing element.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Node error.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum NodeError {
    /// A node was constructed without a value.
    #[error("value cannot be undefined.")]
    MissingValue,

    /// A value that is not a node was used as a connection target.
    #[error("{found} does not match type {expected}.")]
    TypeMismatch {
        found: &'static str,
        expected: &'static str,
    },

    /// The requested connection does not exist.
    #[error(transparent)]
    ElementNotFound(#[from] ElementNotFoundError),
}

impl NodeError {
    /// Returns `true` if the argument of the failed call had the wrong shape.
    ///
    /// This is the case for a missing value at construction and for
    /// connection targets that are not nodes.
    pub fn is_type_constraint_violation(&self) -> bool {
        match self {
            NodeError::MissingValue | NodeError::TypeMismatch { .. } => true,
            NodeError::ElementNotFound(_) => false,
        }
    }
}
