use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
/// An error produced by a quaternion or rotation operation.
pub enum Error {
    /// A component is NaN or infinite.
    #[error("Quaternion and vector components must be finite")]
    InvalidValue,
    /// The divisor has a zero norm.
    #[error("Division by a zero-norm quaternion")]
    DivisionByZero,
    /// The axis of rotation is a zero vector.
    #[error("Axis of rotation must not be a zero vector")]
    InvalidAxis,
}
