//! Push-side adapter

use std::io::{self, Write};

use tracing::debug;
use utfbom_core::{TransformError, Transformer};

use crate::{io_error, DEFAULT_BUF_SIZE};

/// Writer that transforms bytes before passing them to `inner`
///
/// Call [`finish`](Self::finish) once the stream is complete so the stage
/// sees its final call.
#[derive(Debug)]
pub struct TransformWriter<W: Write, T: Transformer> {
    inner: W,
    stage: T,
    buf: Vec<u8>,
    written: usize,
}

impl<W: Write, T: Transformer> TransformWriter<W, T> {
    /// Create writer with the default output buffer size
    pub fn new(inner: W, stage: T) -> Self {
        Self::with_capacity(DEFAULT_BUF_SIZE, inner, stage)
    }

    /// Create writer whose output buffer holds `capacity` bytes
    ///
    /// A zero capacity is raised to one byte.
    pub fn with_capacity(capacity: usize, inner: W, stage: T) -> Self {
        Self {
            inner,
            stage,
            buf: vec![0u8; capacity.max(1)],
            written: 0,
        }
    }

    /// Get reference to the inner writer
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Get mutable reference to the inner writer
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Get reference to the transform stage
    pub const fn transformer(&self) -> &T {
        &self.stage
    }

    /// Run the final call, flush, and return the inner writer
    ///
    /// # Errors
    ///
    /// Returns any error from writing to or flushing the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        let report = self.stage.transform(&mut self.buf, &[], true);
        self.inner.write_all(&self.buf[..report.written])?;
        self.inner.flush()?;
        debug!(written = self.written + report.written, "transform writer finished");
        Ok(self.inner)
    }
}

impl<W: Write, T: Transformer> Write for TransformWriter<W, T> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut pending = data;
        while !pending.is_empty() {
            let report = self.stage.transform(&mut self.buf, pending, false);
            if !report.made_progress() {
                let offset = data.len() - pending.len();
                return Err(io_error(TransformError::NoProgress { offset }));
            }
            self.inner.write_all(&self.buf[..report.written])?;
            self.written += report.written;
            pending = &pending[report.consumed..];
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
