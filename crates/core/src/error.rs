//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure the ledger can produce is one of these three kinds. None of
/// them is fatal: callers report the message and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation; `field` names the offending attribute.
    #[error("invalid {field}: {message}")]
    InvalidArgument {
        field: &'static str,
        message: String,
    },

    /// A product with the same id is already tracked.
    #[error("product with id {0} already exists")]
    DuplicateKey(ProductId),

    /// No product with this id is tracked.
    #[error("product with id {0} not found")]
    NotFound(ProductId),
}

impl DomainError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    pub fn duplicate(id: ProductId) -> Self {
        Self::DuplicateKey(id)
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    /// The field that failed validation, if this is an `InvalidArgument`.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(*field),
            _ => None,
        }
    }
}
