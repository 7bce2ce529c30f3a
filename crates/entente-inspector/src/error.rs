//! Error types for the inspector binary.

/// Top-level error for the inspector.
///
/// Each variant wraps a subsystem error so that `main` can propagate with
/// `?`.
#[derive(Debug, thiserror::Error)]
pub enum InspectorError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: entente_core::ConfigError,
    },

    /// Game assembly failed.
    #[error("setup error: {source}")]
    Setup {
        /// The underlying core error.
        #[from]
        source: entente_core::CoreError,
    },

    /// Writing the report failed.
    #[error("report error: {source}")]
    Report {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
