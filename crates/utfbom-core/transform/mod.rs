//! Chunked byte-to-byte transform stages
//!
//! A [`Transformer`] is one stage of an incremental pipeline. The pipeline
//! offers it a read-only input chunk and a bounded output buffer; the stage
//! reports how many bytes it consumed and wrote, and whether it ran out of
//! output space. The pipeline owns buffering and scheduling, a stage only
//! ever sees the bytes of the current call.
//!
//! # Calling convention
//!
//! - A stage never writes more than `dst.len()` bytes.
//! - [`Status::ShortDst`] means input is left over because the output buffer
//!   filled up. Drain the buffer and call again with `&src[consumed..]`.
//! - `at_eof` marks the last input of the logical stream. An empty final
//!   call must always succeed.

mod nop;
mod remover;

pub use nop::Nop;
pub use remover::{BomRemover, RemoverState};

/// Outcome of a single call that made it past argument handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// All offered input was handled
    #[default]
    Ok,
    /// Output buffer too small; re-invoke with the unconsumed remainder
    ShortDst,
}

/// Progress report of a single [`Transformer::transform`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub struct Transformed {
    /// Bytes written to the front of the output buffer
    pub written: usize,
    /// Bytes consumed from the front of the input chunk
    pub consumed: usize,
    /// Whether the caller must come back with more output space
    pub status: Status,
}

impl Transformed {
    /// Report for a call that handled all of its input
    pub const fn ok(written: usize, consumed: usize) -> Self {
        Self {
            written,
            consumed,
            status: Status::Ok,
        }
    }

    /// Report for a call that stopped because the output buffer filled up
    pub const fn short_dst(written: usize, consumed: usize) -> Self {
        Self {
            written,
            consumed,
            status: Status::ShortDst,
        }
    }

    /// Report that neither consumes nor writes anything
    pub const fn empty() -> Self {
        Self::ok(0, 0)
    }

    /// Check if the caller has to drain output and call again
    #[must_use]
    pub const fn is_short_dst(&self) -> bool {
        matches!(self.status, Status::ShortDst)
    }

    /// Check if the call consumed or produced anything
    #[must_use]
    pub const fn made_progress(&self) -> bool {
        self.written > 0 || self.consumed > 0
    }
}

/// A stage in a chunked byte-to-byte pipeline
///
/// Implementations keep at most a small amount of per-stream state and are
/// owned by exactly one stream at a time. `reset` returns the stage to the
/// state of a freshly created one so it can serve another stream.
pub trait Transformer {
    /// Transform `src` into `dst`
    ///
    /// See the [module documentation](self) for the calling convention.
    fn transform(&mut self, dst: &mut [u8], src: &[u8], at_eof: bool) -> Transformed;

    /// Forget all per-stream state
    fn reset(&mut self);
}

impl<T: Transformer + ?Sized> Transformer for &mut T {
    fn transform(&mut self, dst: &mut [u8], src: &[u8], at_eof: bool) -> Transformed {
        (**self).transform(dst, src, at_eof)
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

impl<T: Transformer + ?Sized> Transformer for alloc::boxed::Box<T> {
    fn transform(&mut self, dst: &mut [u8], src: &[u8], at_eof: bool) -> Transformed {
        (**self).transform(dst, src, at_eof)
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

/// Copy as much of `src` as fits into `dst`
///
/// Shared by the stages that forward bytes unchanged.
pub(crate) fn copy_bounded(dst: &mut [u8], src: &[u8]) -> Transformed {
    let n = src.len().min(dst.len());
    dst[..n].copy_from_slice(&src[..n]);
    if n < src.len() {
        Transformed::short_dst(n, n)
    } else {
        Transformed::ok(n, n)
    }
}
