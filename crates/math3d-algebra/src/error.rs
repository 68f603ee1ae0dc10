/// An error type for the algebra types.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// The buffer does not hold the number of elements the target type needs.
    #[error("Dimension mismatch. Expected {expected} elements, got {got}")]
    DimensionMismatch {
        /// Number of elements required.
        expected: usize,
        /// Number of elements provided.
        got: usize,
    },

    /// The buffer shape cannot be interpreted as the target type.
    #[error("Invalid buffer shape ({rows}, {cols})")]
    InvalidShape {
        /// Number of rows of the buffer.
        rows: usize,
        /// Number of columns of the buffer.
        cols: usize,
    },

    /// The matrix determinant is zero (within machine epsilon).
    #[error("Matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// The operation needs a value with non-zero length.
    #[error("Cannot {0} a zero-length value")]
    ZeroLength(&'static str),
}
