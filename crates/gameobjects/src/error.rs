//! Error types shared by every value type in the crate.
//!
//! Each [`MathError`] variant maps onto one [`ErrorKind`], so callers can
//! branch on the broad category (bad argument, bad index, bad math) without
//! matching individual variants.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MathError>;

/// Errors raised by constructors, accessors and matrix inversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    /// A variadic constructor received the wrong number of values.
    #[error("expected {expected} values, got {got}")]
    Arity {
        /// Number of values required.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// An argument lies outside the domain the operation accepts.
    #[error("argument out of domain: {0}")]
    Domain(String),

    /// A row, column or component index was outside `0..len`.
    #[error("index {index} out of range, should be less than {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of addressable slots.
        len: usize,
    },

    /// The matrix has no inverse.
    #[error("matrix can not be inverted")]
    Singular,

    /// A color string was not of the form `#RRGGBB`.
    #[error("requires a color encoded as an html style string: '{0}' is invalid")]
    InvalidHex(String),
}

/// Broad category of a [`MathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed a malformed argument.
    Argument(ArgumentKind),
    /// The caller addressed a slot that does not exist.
    Index(IndexKind),
    /// The computation itself is undefined for the input.
    Math(MathKind),
}

/// Ways an argument can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// Wrong number of values.
    Arity,
    /// Value outside the accepted range.
    Domain,
    /// Text that does not parse.
    Format,
}

/// Ways an index can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    /// Index past the end.
    OutOfRange,
}

/// Ways a computation can be undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathKind {
    /// Zero or numerically indistinguishable-from-zero determinant.
    Singular,
}

impl MathError {
    /// Returns the category this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            MathError::Arity { .. } => ErrorKind::Argument(ArgumentKind::Arity),
            MathError::Domain(_) => ErrorKind::Argument(ArgumentKind::Domain),
            MathError::InvalidHex(_) => ErrorKind::Argument(ArgumentKind::Format),
            MathError::OutOfRange { .. } => ErrorKind::Index(IndexKind::OutOfRange),
            MathError::Singular => ErrorKind::Math(MathKind::Singular),
        }
    }

    /// Checks `index < len`, returning [`MathError::OutOfRange`] otherwise.
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(MathError::OutOfRange { index, len })
        }
    }
}
