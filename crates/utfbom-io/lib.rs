//! # utfbom-io
//!
//! `std::io` adapters that run a [`Transformer`] over a byte stream.
//!
//! - [`TransformWriter`] transforms everything written to it and forwards the
//!   result to an inner writer.
//! - [`TransformReader`] transforms everything read from an inner reader.
//!
//! # Example
//!
//! ```rust
//! use std::io::{Read, Write};
//! use utfbom_core::BomRemover;
//! use utfbom_io::{TransformReader, TransformWriter};
//!
//! let mut writer = TransformWriter::new(Vec::new(), BomRemover::new());
//! writer.write_all(b"\xEF\xBB\xBFhello")?;
//! assert_eq!(writer.finish()?, b"hello");
//!
//! let mut reader = TransformReader::new(&b"\xFF\xFEhi"[..], BomRemover::new());
//! let mut text = Vec::new();
//! reader.read_to_end(&mut text)?;
//! assert_eq!(text, b"hi");
//! # Ok::<(), std::io::Error>(())
//! ```

#![deny(unsafe_code)]

mod reader;
mod writer;

pub use reader::TransformReader;
pub use writer::TransformWriter;

pub use utfbom_core::{Transformer, TransformError};

/// Default size of the adapters' internal buffers
pub const DEFAULT_BUF_SIZE: usize = 4096;

/// Wrap a transform error as an I/O error
fn io_error(err: TransformError) -> std::io::Error {
    std::io::Error::other(err)
}
