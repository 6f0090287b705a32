//! Error types for topology generation

use crate::edge::Channel;
use thiserror::Error;

/// Result type alias for topology operations
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Errors raised before any edge is emitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// Configuration or unit list the chosen variant cannot wire
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Reason for failure
        reason: String,
    },

    /// A populated unit would link to an empty slot
    #[error("Inconsistent topology: unit {unit} needs a {channel} link to empty slot {missing}")]
    InconsistentTopology {
        /// Populated unit whose link cannot be placed
        unit: usize,
        /// Empty (or out of range) slot the link points at
        missing: usize,
        /// Channel of the dangling link
        channel: Channel,
    },
}

impl TopologyError {
    /// Create an invalid argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create an inconsistent topology error
    pub fn inconsistent(unit: usize, missing: usize, channel: Channel) -> Self {
        Self::InconsistentTopology {
            unit,
            missing,
            channel,
        }
    }
}
