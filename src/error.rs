//! Error types for traversal and key-path access
//!
//! Missing data is never an error: reads report it through
//! [`Lookup::NotFound`](crate::property::Lookup). The variants here are
//! usage errors raised before any output is produced.

/// Errors returned by traversal and key-path operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Traversal (or `set`) was started on a leaf instead of a container.
    #[error("root node is not a container")]
    NonContainerRoot,
    /// A key path was neither a string nor a sequence of strings.
    #[error("{0} is not a string or an array of strings")]
    InvalidPathType(String),
    /// A key path had no segments where a final property key is required.
    #[error("key path has no segments")]
    EmptyPath,
}

impl Error {
    /// Create a new InvalidPathType error
    pub fn invalid_path_type(found: impl Into<String>) -> Self {
        Self::InvalidPathType(found.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
