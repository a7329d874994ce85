//! Error types for platform identification.

/// Errors that can occur while obtaining or parsing a platform identity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// The probe could not determine the platform.
    #[error("platform probe failed: {detail}")]
    Probe {
        /// Description of the failure.
        detail: String,
    },

    /// A machine or build identifier was empty.
    #[error("empty {field} identifier")]
    EmptyIdentifier {
        /// Which identifier was empty ("machine" or "build").
        field: &'static str,
    },

    /// A string did not parse as an OS build identifier.
    #[error("invalid build identifier '{value}'")]
    InvalidBuild {
        /// The offending string.
        value: String,
    },
}

/// Result type for platform operations.
pub type Result<T> = std::result::Result<T, PlatformError>;
