//! Error type for driving transformers
//!
//! A short destination buffer is not an error: it is reported through
//! [`Status::ShortDst`](crate::transform::Status::ShortDst) so the caller can
//! drain its buffer and call again. The errors here come from the drivers
//! that loop over a stage and from invalid driver configuration.

use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// Errors raised while running a transformer to completion
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A driver option is out of range
    InvalidConfig {
        /// Name of the offending option
        field: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },

    /// A stage neither consumed input nor produced output while input remained
    NoProgress {
        /// Offset into the input where the stage stalled
        offset: usize,
    },
}

impl TransformError {
    /// Create configuration error for `field`
    #[must_use]
    pub const fn invalid_config(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidConfig { field, reason }
    }

    /// Check if retrying with different options could succeed
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "Invalid driver configuration: {field} {reason}")
            }
            Self::NoProgress { offset } => {
                write!(f, "Transformer made no progress at input offset {offset}")
            }
        }
    }
}

/// no_std compatible Error implementation
#[cfg(not(feature = "std"))]
impl core::error::Error for TransformError {}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, TransformError>;
