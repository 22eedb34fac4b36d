//! BOM-stripping stage
//!
//! Looks for a byte-order mark only in the window of its first call, drops
//! it, and forwards every later byte unchanged through [`Nop`].
//!
//! The window is the input chunk truncated to the output buffer's capacity.
//! When that window is shorter than the marker, the marker cannot be
//! recognized and its bytes are forwarded as ordinary data; detection is
//! never retried on a later call. Give the first call at least
//! [`MAX_BOM_LEN`] bytes of input and output space to avoid this.

use tracing::{trace, warn};

use super::{Nop, Transformed, Transformer};
use crate::bom::{detect_bom, BomType, MAX_BOM_LEN};

/// Detection state of a [`BomRemover`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemoverState {
    /// The next call inspects the start of the stream
    #[default]
    AtStart,
    /// Detection already ran; calls copy bytes unchanged
    PassThrough,
}

/// Streaming stage that removes one leading byte-order mark
///
/// Buffers no data across calls. The only per-stream state is whether the
/// start of the stream has been inspected, so one instance serves exactly
/// one stream at a time; call [`Transformer::reset`] to reuse it.
///
/// # Example
///
/// ```rust
/// use utfbom_core::{BomRemover, RemoverState, Transformed, Transformer};
///
/// let mut remover = BomRemover::new();
/// let mut dst = [0u8; 16];
///
/// let first = remover.transform(&mut dst, b"\xEF\xBB\xBF\xEF\xBB\xBF", false);
/// assert_eq!(first, Transformed::ok(3, 6));
/// assert_eq!(&dst[..3], b"\xEF\xBB\xBF");
/// assert_eq!(remover.state(), RemoverState::PassThrough);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BomRemover {
    state: RemoverState,
    stripped: Option<BomType>,
    nop: Nop,
}

impl BomRemover {
    /// Create remover for a new stream
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RemoverState::AtStart,
            stripped: None,
            nop: Nop,
        }
    }

    /// Current detection state
    #[must_use]
    pub const fn state(&self) -> RemoverState {
        self.state
    }

    /// Marker removed from the current stream, if any
    #[must_use]
    pub const fn stripped(&self) -> Option<BomType> {
        self.stripped
    }

    /// First call of a stream: inspect the window, drop a marker, copy the rest
    fn transform_start(&mut self, dst: &mut [u8], src: &[u8]) -> Transformed {
        let window_len = src.len().min(dst.len());
        let window = &src[..window_len];
        let remainder = src.len() - window_len;

        if remainder > 0 && window_len < MAX_BOM_LEN {
            warn!(
                window_len,
                capacity = dst.len(),
                "output buffer smaller than the longest BOM on first call; a marker may pass through"
            );
        }

        let payload = match detect_bom(window) {
            Some(bom) => {
                trace!(encoding = bom.encoding_name(), len = bom.len(), "stripped BOM");
                self.stripped = Some(bom);
                &window[bom.len()..]
            }
            None => window,
        };

        dst[..payload.len()].copy_from_slice(payload);
        self.state = RemoverState::PassThrough;
        trace!(consumed = window_len, written = payload.len(), "BOM window closed");

        if remainder > 0 {
            Transformed::short_dst(payload.len(), window_len)
        } else {
            Transformed::ok(payload.len(), window_len)
        }
    }
}

impl Transformer for BomRemover {
    fn transform(&mut self, dst: &mut [u8], src: &[u8], at_eof: bool) -> Transformed {
        if src.is_empty() && at_eof {
            return Transformed::empty();
        }

        match self.state {
            RemoverState::PassThrough => self.nop.transform(dst, src, at_eof),
            RemoverState::AtStart => self.transform_start(dst, src),
        }
    }

    fn reset(&mut self) {
        self.state = RemoverState::AtStart;
        self.stripped = None;
        self.nop.reset();
    }
}
