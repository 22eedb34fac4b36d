//! In-memory driver loop for transform stages
//!
//! The real pipeline lives outside this crate. [`drive`] is the reference
//! loop used by tests and by callers that already hold the whole input:
//! it offers the input in chunks, drains a bounded output buffer after
//! every call and re-invokes the stage whenever it reports a short
//! destination.
//!
//! # Example
//!
//! ```rust
//! use utfbom_core::{drive, BomRemover, DriveConfig};
//!
//! let config = DriveConfig::new(4, 3)?;
//! let output = drive(&mut BomRemover::new(), b"\xEF\xBB\xBFabcdef", &config)?;
//! assert_eq!(output, b"abcdef");
//! # Ok::<(), utfbom_core::TransformError>(())
//! ```

use alloc::{vec, vec::Vec};
use tracing::debug;

use crate::{
    errors::{Result, TransformError},
    transform::Transformer,
};

/// Default input chunk and output buffer size
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Chunking options for [`drive`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveConfig {
    /// Maximum number of input bytes offered per call
    pub chunk_size: usize,
    /// Capacity of the output buffer handed to the stage
    pub buffer_capacity: usize,
}

impl DriveConfig {
    /// Create validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidConfig`] if either size is zero.
    pub fn new(chunk_size: usize, buffer_capacity: usize) -> Result<Self> {
        let config = Self {
            chunk_size,
            buffer_capacity,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that both sizes are usable
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidConfig`] naming the first zero field.
    pub const fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(TransformError::invalid_config(
                "chunk_size",
                "must be greater than zero",
            ));
        }
        if self.buffer_capacity == 0 {
            return Err(TransformError::invalid_config(
                "buffer_capacity",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Configuration that offers `len` bytes in one call with matching output space
    #[must_use]
    pub const fn single_chunk(len: usize) -> Self {
        let size = if len == 0 { 1 } else { len };
        Self {
            chunk_size: size,
            buffer_capacity: size,
        }
    }
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_BUFFER_SIZE,
            buffer_capacity: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// Run `stage` over `src` and collect everything it writes
///
/// The stage is not reset first, so a stage that already saw part of a
/// stream continues where it left off. The last chunk is offered with
/// `at_eof` set, followed by one empty final call.
///
/// # Errors
///
/// Returns [`TransformError::InvalidConfig`] for a zero chunk size or buffer
/// capacity and [`TransformError::NoProgress`] if the stage stalls while
/// input remains.
pub fn drive<T>(mut stage: T, src: &[u8], config: &DriveConfig) -> Result<Vec<u8>>
where
    T: Transformer,
{
    config.validate()?;

    let mut output = Vec::with_capacity(src.len());
    let mut dst = vec![0u8; config.buffer_capacity];
    let mut offset = 0;

    for chunk in src.chunks(config.chunk_size) {
        let at_eof = offset + chunk.len() == src.len();
        let mut pending = chunk;

        while !pending.is_empty() {
            let report = stage.transform(&mut dst, pending, at_eof);
            if !report.made_progress() {
                return Err(TransformError::NoProgress { offset });
            }

            output.extend_from_slice(&dst[..report.written]);
            pending = &pending[report.consumed..];
            offset += report.consumed;
        }
    }

    let report = stage.transform(&mut dst, &[], true);
    output.extend_from_slice(&dst[..report.written]);

    debug!(consumed = offset, written = output.len(), "drive finished");
    Ok(output)
}

/// Reset `stage` and run it over all of `src` in a single chunk
///
/// # Errors
///
/// Returns [`TransformError::NoProgress`] if the stage stalls.
pub fn transform_bytes<T>(mut stage: T, src: &[u8]) -> Result<Vec<u8>>
where
    T: Transformer,
{
    stage.reset();
    drive(stage, src, &DriveConfig::single_chunk(src.len()))
}
