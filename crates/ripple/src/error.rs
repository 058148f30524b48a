//! Error types for ripple operations.
//!
//! Resolvers themselves are infallible: they run over a [`DependencyGraph`]
//! whose edges were validated when the graph was built. Everything that can
//! go wrong happens at the boundary:
//!
//! - **Input problems**: unrecognized edge types, malformed snapshots, bad config
//! - **Infrastructure problems**: reading snapshot or config files
//!
//! Validation errors abort the whole load. No partial graph is ever returned.
//!
//! [`DependencyGraph`]: crate::DependencyGraph

use thiserror::Error;

/// Result type for ripple operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for ripple operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An edge carried a type other than `compile`, `export` or `runtime`
    #[error("unhandled edge type `{0}`")]
    UnknownEdgeType(String),

    /// Graph snapshot was not valid JSON or had the wrong shape
    #[error("invalid graph snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if the error was caused by the caller's input
    /// (graph snapshot, configuration) rather than the environment.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownEdgeType(_) | Self::Json(_) | Self::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_edge_type_names_the_offending_type() {
        let error = Error::UnknownEdgeType("dynamic".to_string());

        let display = error.to_string();
        assert!(display.contains("dynamic"), "got: {display}");
        assert!(error.is_input_error());
    }

    #[test]
    fn io_errors_are_not_input_errors() {
        let error = Error::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));

        assert!(!error.is_input_error());
        assert!(error.to_string().starts_with("I/O error"));
    }
}
