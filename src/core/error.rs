use thiserror::Error;

/// Errors that can occur during invoice construction or code parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// A construction argument was out of range.
    #[error("{message}")]
    InvalidArgument {
        /// Name of the rejected argument (`subtotal` or `tax_rate`).
        argument: &'static str,
        /// Fixed human-readable description.
        message: &'static str,
    },

    /// Text did not name a code on the allow-list.
    #[error("unknown discount code: {0:?}")]
    UnknownDiscountCode(String),
}

impl InvoiceError {
    pub(crate) fn negative_subtotal() -> Self {
        Self::InvalidArgument {
            argument: "subtotal",
            message: "Subtotal cannot be negative.",
        }
    }

    pub(crate) fn negative_tax_rate() -> Self {
        Self::InvalidArgument {
            argument: "tax_rate",
            message: "Tax rate cannot be negative.",
        }
    }

    /// Name of the offending argument, if this is a construction error.
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { argument, .. } => Some(*argument),
            Self::UnknownDiscountCode(_) => None,
        }
    }
}
