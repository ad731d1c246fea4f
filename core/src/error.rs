use thiserror::Error;

use crate::repr::AddressKind;

/// Errors reported by the conversion and validation core.
///
/// Two classes exist: invalid-argument errors (the caller broke a
/// precondition) and malformed-value errors (the input text does not hold a
/// usable value). Safe-mode conversion demotes only the latter to the
/// empty-string sentinel.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("destination representation must differ from the source: {0}")]
    SameRepresentation(AddressKind),

    #[error("integer input is only compatible with the decimal representation, got {0}")]
    IntegerWithNonDecimal(AddressKind),

    #[error("value is outside of the IPv4 range: {0}")]
    OutOfRange(String),

    #[error("value does not parse as {kind}: {value}")]
    Malformed { kind: AddressKind, value: String },
}

impl CodecError {
    /// True for the malformed-value class, which safe-mode conversion maps
    /// to an empty result instead of propagating.
    pub fn is_value_error(&self) -> bool {
        matches!(
            self,
            CodecError::OutOfRange(_) | CodecError::Malformed { .. }
        )
    }
}
