use thiserror::Error;

/// Errors raised by [`Container`](super::Container) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("key already registered: {0:?}")]
    DuplicateKey(String),

    #[error("unknown key: {0:?}")]
    UnknownKey(String),
}
