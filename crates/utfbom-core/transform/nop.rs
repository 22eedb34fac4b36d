//! Identity stage

use super::{copy_bounded, Transformed, Transformer};

/// Stage that copies its input unchanged
///
/// Has no state, so [`Transformer::reset`] does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nop;

impl Transformer for Nop {
    fn transform(&mut self, dst: &mut [u8], src: &[u8], _at_eof: bool) -> Transformed {
        copy_bounded(dst, src)
    }

    fn reset(&mut self) {}
}
