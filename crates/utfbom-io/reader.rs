//! Pull-side adapter

use std::io::{self, Read};

use tracing::debug;
use utfbom_core::{TransformError, Transformer};

use crate::{io_error, DEFAULT_BUF_SIZE};

/// Reader that transforms bytes pulled from `inner`
///
/// Input is read into an internal buffer and transformed into a second
/// internal buffer of the same capacity, which later reads drain. The
/// caller's buffer size never bounds what the stage sees, so even a byte at
/// a time read loop gets its leading marker stripped.
#[derive(Debug)]
pub struct TransformReader<R: Read, T: Transformer> {
    inner: R,
    stage: T,
    src: Vec<u8>,
    pos: usize,
    filled: usize,
    dst: Vec<u8>,
    dst_pos: usize,
    dst_filled: usize,
    offset: usize,
    eof: bool,
    done: bool,
}

impl<R: Read, T: Transformer> TransformReader<R, T> {
    /// Create reader with the default buffer size
    pub fn new(inner: R, stage: T) -> Self {
        Self::with_capacity(DEFAULT_BUF_SIZE, inner, stage)
    }

    /// Create reader whose input and output buffers hold `capacity` bytes each
    ///
    /// A zero capacity is raised to one byte.
    pub fn with_capacity(capacity: usize, inner: R, stage: T) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner,
            stage,
            src: vec![0u8; capacity],
            pos: 0,
            filled: 0,
            dst: vec![0u8; capacity],
            dst_pos: 0,
            dst_filled: 0,
            offset: 0,
            eof: false,
            done: false,
        }
    }

    /// Get reference to the transform stage
    pub const fn transformer(&self) -> &T {
        &self.stage
    }

    /// Unwrap the inner reader, dropping any buffered input and output
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Pull more input once the buffer is drained
    fn refill(&mut self) -> io::Result<()> {
        let n = loop {
            match self.inner.read(&mut self.src) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        self.pos = 0;
        self.filled = n;
        self.eof = n == 0;
        Ok(())
    }

    /// Transform until the output buffer holds something or the stream ends
    ///
    /// Returns the number of transformed bytes now waiting in the output
    /// buffer; zero means end of stream.
    fn fill_output(&mut self) -> io::Result<usize> {
        loop {
            if self.pos < self.filled {
                let pending = &self.src[self.pos..self.filled];
                let report = self.stage.transform(&mut self.dst, pending, false);
                if !report.made_progress() {
                    return Err(io_error(TransformError::NoProgress {
                        offset: self.offset,
                    }));
                }
                self.pos += report.consumed;
                self.offset += report.consumed;
                if report.written > 0 {
                    self.dst_pos = 0;
                    self.dst_filled = report.written;
                    return Ok(report.written);
                }
                continue;
            }

            if self.eof {
                if !self.done {
                    self.done = true;
                    let report = self.stage.transform(&mut self.dst, &[], true);
                    debug!(consumed = self.offset, "transform reader reached end of input");
                    self.dst_pos = 0;
                    self.dst_filled = report.written;
                    return Ok(report.written);
                }
                return Ok(0);
            }

            self.refill()?;
        }
    }
}

impl<R: Read, T: Transformer> Read for TransformReader<R, T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        if self.dst_pos == self.dst_filled && self.fill_output()? == 0 {
            return Ok(0);
        }

        let available = &self.dst[self.dst_pos..self.dst_filled];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.dst_pos += n;
        Ok(n)
    }
}
