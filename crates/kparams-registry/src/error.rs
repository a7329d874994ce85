//! Error types for registry initialization and lookup.

use kparams_platform::{PlatformDescriptor, PlatformError};

use crate::key::ParameterKey;

/// Errors produced by the parameter registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Too few offset rules matched the platform for its parameters to be trusted.
    #[error("no offsets for {platform} ({matched} of {required} required offset rules matched)")]
    QuorumNotMet {
        /// The unrecognized platform.
        platform: PlatformDescriptor,
        /// Number of offset rules that fired.
        matched: usize,
        /// Minimum number required.
        required: usize,
    },

    /// A parameter was read before initialization completed, or no rule set it.
    #[error("unresolved parameter {key}")]
    UnresolvedParameter {
        /// The key that was read.
        key: ParameterKey,
    },

    /// A derived parameter would divide by a zero-valued base parameter.
    #[error("cannot derive {target}: {key} is zero")]
    ZeroDivisor {
        /// The zero-valued base parameter.
        key: ParameterKey,
        /// The derived parameter being computed.
        target: ParameterKey,
    },

    /// The platform probe failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// `init` was called on a registry that already ran.
    #[error("registry already initialized")]
    AlreadyInitialized,
}

impl RegistryError {
    /// Whether this error indicates a defect in the rule tables or in how the
    /// registry is driven, as opposed to an unrecognized platform.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnresolvedParameter { .. } | Self::ZeroDivisor { .. } | Self::AlreadyInitialized
        )
    }
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatality() {
        let key = ParameterKey::Size("ipc_port");
        assert!(RegistryError::UnresolvedParameter { key }.is_fatal());
        assert!(RegistryError::AlreadyInitialized.is_fatal());

        let platform = PlatformDescriptor::new("iPhoneUnknown,1", "ZZ000Z").unwrap();
        let quorum = RegistryError::QuorumNotMet {
            platform,
            matched: 0,
            required: 2,
        };
        assert!(!quorum.is_fatal());
        assert_eq!(
            quorum.to_string(),
            "no offsets for iPhoneUnknown,1 ZZ000Z (0 of 2 required offset rules matched)"
        );
    }

    #[test]
    fn probe_failure_is_recoverable() {
        let err: RegistryError = PlatformError::Probe {
            detail: "no uname".into(),
        }
        .into();
        assert!(!err.is_fatal());
    }
}
