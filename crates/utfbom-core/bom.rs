//! BOM (Byte Order Mark) classification
//!
//! Stateless recognizers for the five byte-order marks the remover strips.
//! Every predicate inspects only the prefix of the given bytes, never
//! allocates and never fails: input shorter than a marker simply does not
//! match.
//!
//! # Examples
//!
//! ```rust
//! use utfbom_core::bom::{detect_bom, is_utf8_bom, BomType};
//!
//! assert!(is_utf8_bom(&[0xEF, 0xBB, 0xBF, b'a']));
//! assert_eq!(detect_bom(&[0xFF, 0xFE, 0x00, 0x00]), Some(BomType::Utf32Le));
//! assert_eq!(detect_bom(&[0xFF, 0xFE, b'a', 0x00]), Some(BomType::Utf16Le));
//! assert_eq!(detect_bom(b"plain"), None);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length of the UTF-32 markers
pub const BOM_SIZE_4_BYTE: usize = 4;
/// Length of the UTF-8 marker
pub const BOM_SIZE_3_BYTE: usize = 3;
/// Length of the UTF-16 markers
pub const BOM_SIZE_2_BYTE: usize = 2;

/// Longest marker the classifier knows about
///
/// A first window shorter than this may hide a marker that only becomes
/// visible with more bytes.
pub const MAX_BOM_LEN: usize = BOM_SIZE_4_BYTE;

/// Byte Order Mark variants recognized at the start of a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BomType {
    /// UTF-32 Big Endian (00 00 FE FF)
    Utf32Be,
    /// UTF-32 Little Endian (FF FE 00 00)
    Utf32Le,
    /// UTF-8 (EF BB BF)
    Utf8,
    /// UTF-16 Big Endian (FE FF)
    Utf16Be,
    /// UTF-16 Little Endian (FF FE)
    Utf16Le,
}

/// Order in which markers are tried against a window.
///
/// `FF FE` is a prefix of `FF FE 00 00`, so the 4-byte markers must be tried
/// before the 2-byte ones. The first match wins.
pub const DETECTION_ORDER: [BomType; 5] = [
    BomType::Utf32Be,
    BomType::Utf32Le,
    BomType::Utf8,
    BomType::Utf16Be,
    BomType::Utf16Le,
];

impl BomType {
    /// Get byte signature for this BOM type
    #[must_use]
    pub const fn signature(self) -> &'static [u8] {
        match self {
            Self::Utf32Be => &[0x00, 0x00, 0xFE, 0xFF],
            Self::Utf32Le => &[0xFF, 0xFE, 0x00, 0x00],
            Self::Utf8 => &[0xEF, 0xBB, 0xBF],
            Self::Utf16Be => &[0xFE, 0xFF],
            Self::Utf16Le => &[0xFF, 0xFE],
        }
    }

    /// Get length of this BOM in bytes
    #[must_use]
    pub const fn len(self) -> usize {
        self.signature().len()
    }

    /// Always `false`; every marker has a non-zero length
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Canonical name of the encoding this marker declares
    #[must_use]
    pub const fn encoding_name(self) -> &'static str {
        match self {
            Self::Utf32Be => "UTF-32BE",
            Self::Utf32Le => "UTF-32LE",
            Self::Utf8 => "UTF-8",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf16Le => "UTF-16LE",
        }
    }

    /// Check whether `bytes` starts with this marker
    #[must_use]
    pub fn matches(self, bytes: &[u8]) -> bool {
        match self {
            Self::Utf32Be => is_utf32_be_bom(bytes),
            Self::Utf32Le => is_utf32_le_bom(bytes),
            Self::Utf8 => is_utf8_bom(bytes),
            Self::Utf16Be => is_utf16_be_bom(bytes),
            Self::Utf16Le => is_utf16_le_bom(bytes),
        }
    }
}

/// Check for a UTF-32 big-endian marker (`00 00 FE FF`)
#[must_use]
pub const fn is_utf32_be_bom(bytes: &[u8]) -> bool {
    bytes.len() >= BOM_SIZE_4_BYTE
        && bytes[0] == 0x00
        && bytes[1] == 0x00
        && bytes[2] == 0xFE
        && bytes[3] == 0xFF
}

/// Check for a UTF-32 little-endian marker (`FF FE 00 00`)
#[must_use]
pub const fn is_utf32_le_bom(bytes: &[u8]) -> bool {
    bytes.len() >= BOM_SIZE_4_BYTE
        && bytes[0] == 0xFF
        && bytes[1] == 0xFE
        && bytes[2] == 0x00
        && bytes[3] == 0x00
}

/// Check for a UTF-8 marker (`EF BB BF`)
#[must_use]
pub const fn is_utf8_bom(bytes: &[u8]) -> bool {
    bytes.len() >= BOM_SIZE_3_BYTE && bytes[0] == 0xEF && bytes[1] == 0xBB && bytes[2] == 0xBF
}

/// Check for a UTF-16 big-endian marker (`FE FF`)
#[must_use]
pub const fn is_utf16_be_bom(bytes: &[u8]) -> bool {
    bytes.len() >= BOM_SIZE_2_BYTE && bytes[0] == 0xFE && bytes[1] == 0xFF
}

/// Check for a UTF-16 little-endian marker (`FF FE`)
///
/// Also true for a UTF-32 little-endian marker, which starts with the same
/// two bytes. Use [`detect_bom`] to tell them apart.
#[must_use]
pub const fn is_utf16_le_bom(bytes: &[u8]) -> bool {
    bytes.len() >= BOM_SIZE_2_BYTE && bytes[0] == 0xFF && bytes[1] == 0xFE
}

/// Detect BOM type at the start of a byte sequence
///
/// Tries [`DETECTION_ORDER`] front to back and returns the first marker that
/// matches, or `None` if the bytes do not start with any known marker.
#[must_use]
pub fn detect_bom(bytes: &[u8]) -> Option<BomType> {
    DETECTION_ORDER.into_iter().find(|bom| bom.matches(bytes))
}

/// Check whether any known marker is present at the start of `bytes`
#[must_use]
pub fn starts_with_bom(bytes: &[u8]) -> bool {
    detect_bom(bytes).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn bom_type_properties() {
        assert_eq!(BomType::Utf8.signature(), &[0xEF, 0xBB, 0xBF]);
        assert_eq!(BomType::Utf8.len(), BOM_SIZE_3_BYTE);
        assert!(!BomType::Utf8.is_empty());
        assert_eq!(BomType::Utf8.encoding_name(), "UTF-8");

        assert_eq!(BomType::Utf32Le.len(), BOM_SIZE_4_BYTE);
        assert_eq!(BomType::Utf32Be.encoding_name(), "UTF-32BE");
        assert_eq!(BomType::Utf16Le.len(), BOM_SIZE_2_BYTE);
        assert_eq!(BomType::Utf16Be.encoding_name(), "UTF-16BE");
    }

    #[test]
    fn detection_order_is_longest_first() {
        let lengths: Vec<usize> = DETECTION_ORDER.iter().map(|bom| bom.len()).collect();
        assert!(lengths.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(lengths.first(), Some(&MAX_BOM_LEN));
    }

    #[test]
    fn each_signature_matches_its_own_predicate() {
        for bom in DETECTION_ORDER {
            assert!(bom.matches(bom.signature()), "{bom:?}");
        }
        assert!(is_utf32_be_bom(BomType::Utf32Be.signature()));
        assert!(is_utf32_le_bom(BomType::Utf32Le.signature()));
        assert!(is_utf8_bom(BomType::Utf8.signature()));
        assert!(is_utf16_be_bom(BomType::Utf16Be.signature()));
        assert!(is_utf16_le_bom(BomType::Utf16Le.signature()));
    }

    #[test]
    fn short_input_never_matches() {
        assert!(!is_utf32_be_bom(&[0x00, 0x00, 0xFE]));
        assert!(!is_utf32_le_bom(&[0xFF, 0xFE, 0x00]));
        assert!(!is_utf8_bom(&[0xEF, 0xBB]));
        assert!(!is_utf16_be_bom(&[0xFE]));
        assert!(!is_utf16_le_bom(&[]));
        assert_eq!(detect_bom(&[]), None);
    }

    #[test]
    fn utf16_le_is_prefix_of_utf32_le() {
        let utf32 = [0xFF, 0xFE, 0x00, 0x00, b'a', 0x00, 0x00, 0x00];
        assert!(is_utf16_le_bom(&utf32));
        assert_eq!(detect_bom(&utf32), Some(BomType::Utf32Le));

        // Only three bytes visible: the UTF-32 marker cannot be confirmed
        assert_eq!(detect_bom(&utf32[..3]), Some(BomType::Utf16Le));
    }

    #[test]
    fn detect_each_variant() {
        assert_eq!(detect_bom(&[0x00, 0x00, 0xFE, 0xFF, 0x00]), Some(BomType::Utf32Be));
        assert_eq!(detect_bom(&[0xEF, 0xBB, 0xBF, b'H', b'i']), Some(BomType::Utf8));
        assert_eq!(detect_bom(&[0xFE, 0xFF, 0x00, b'H']), Some(BomType::Utf16Be));
        assert_eq!(detect_bom(&[0xFF, 0xFE, b'H', 0x00]), Some(BomType::Utf16Le));
    }

    #[test]
    fn partial_markers_are_plain_data() {
        assert!(!starts_with_bom(&[0xEF, 0xBB, b'x']));
        assert!(!starts_with_bom(&[0x00, 0x00, 0xFF, 0xFE]));
        assert!(!starts_with_bom(b"Hello World"));
        assert!(!starts_with_bom(&[b'x', 0xEF, 0xBB, 0xBF]));
    }
}
