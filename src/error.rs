//! Error types for control scheme operations.

/// Rejected registry or editor operation.
///
/// Every variant is a precondition violation: the caller asked for something
/// that the displayed state should not have offered. State is left untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    #[error("a control scheme named '{0}' already exists")]
    DuplicateName(String),
    #[error("control scheme name must not be empty")]
    InvalidName,
    #[error("index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no control scheme is selected")]
    NoSchemeSelected,
    #[error("no control scheme named '{0}'")]
    UnknownScheme(String),
}
