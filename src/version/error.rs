use thiserror::Error;

/// Errors raised while parsing a version string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid number of version components: {0}")]
    ComponentCount(usize),

    #[error("version component is not numeric: {0:?}")]
    NonNumeric(String),
}
