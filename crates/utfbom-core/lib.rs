//! # utfbom-core
//!
//! Streaming removal of a leading byte-order mark (BOM) from a byte stream.
//! The remover is one stage of a chunked byte-to-byte transform pipeline: it
//! looks for a UTF-32, UTF-8 or UTF-16 marker at the very start of the stream,
//! drops it once, and then copies every following byte unchanged.
//!
//! ## Features
//!
//! - **Single pass**: no buffering of the input, only a per-stream state flag
//! - **Bounded output**: never writes past the caller's buffer and reports a
//!   short destination instead
//! - **Single shot**: only the first marker at the start of the stream is removed
//! - **`no_std`**: works with `alloc` only when the `std` feature is disabled
//!
//! ## Quick Start
//!
//! ```rust
//! use utfbom_core::{transform_bytes, BomRemover};
//!
//! let mut remover = BomRemover::new();
//! let output = transform_bytes(&mut remover, b"\xEF\xBB\xBFhello")?;
//! assert_eq!(output, b"hello");
//! # Ok::<(), utfbom_core::TransformError>(())
//! ```
//!
//! Driving the stage by hand with a small output buffer:
//!
//! ```rust
//! use utfbom_core::{BomRemover, Status, Transformer};
//!
//! let mut remover = BomRemover::new();
//! let mut dst = [0u8; 4];
//! let report = remover.transform(&mut dst, b"\xFE\xFFabcdef", false);
//! assert_eq!(report.consumed, 4);
//! assert_eq!(&dst[..report.written], b"ab");
//! assert_eq!(report.status, Status::ShortDst);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod bom;
pub mod driver;
pub mod errors;
pub mod transform;

pub use bom::{detect_bom, starts_with_bom, BomType, DETECTION_ORDER, MAX_BOM_LEN};
pub use driver::{drive, transform_bytes, DriveConfig};
pub use errors::{Result, TransformError};
pub use transform::{BomRemover, Nop, RemoverState, Status, Transformed, Transformer};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
