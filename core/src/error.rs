use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    /// A numeric argument outside its accepted range
    #[error("Invalid argument: {name} must be {expected}, got {value}")]
    InvalidArgument {
        name: &'static str,
        expected: &'static str,
        value: i64,
    },

    /// An empty property, attribute or filter key
    #[error("Invalid argument: {0} must not be empty")]
    EmptyName(&'static str),

    /// A name that would make the serialized query ambiguous
    #[error("Invalid argument: {kind} `{name}` {reason}")]
    InvalidName {
        kind: &'static str,
        name: String,
        reason: &'static str,
    },
}

impl CriteriaError {
    /// Every variant is raised by a builder call handed an unusable value.
    #[inline]
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CriteriaError::InvalidArgument { .. }
                | CriteriaError::EmptyName(_)
                | CriteriaError::InvalidName { .. }
        )
    }
}

/// Result type for builder operations
pub type Result<T> = std::result::Result<T, CriteriaError>;
