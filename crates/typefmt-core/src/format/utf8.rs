//! UTF-8 encoding of a single code point.
//!
//! Reference: RFC 3629 section 3.

use crate::error::FormatError;

pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Encoded bytes of one code point (1 to 4 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedChar {
    bytes: [u8; 4],
    len: usize,
}

impl EncodedChar {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // encode() only emits well-formed sequences.
        core::str::from_utf8(self.as_bytes()).unwrap_or("\u{FFFD}")
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Encode `code_point` as UTF-8.
///
/// Surrogates (`U+D800..=U+DFFF`) and values above `U+10FFFF` are rejected
/// with [`FormatError::InvalidCodePoint`].
pub fn encode(code_point: u32) -> Result<EncodedChar, FormatError> {
    let cp = code_point;
    let invalid = FormatError::InvalidCodePoint {
        value: i128::from(cp),
    };
    let mut bytes = [0u8; 4];
    let len = if cp & !0x7F == 0 {
        bytes[0] = cp as u8;
        1
    } else if cp & !0x7FF == 0 {
        bytes[0] = 0xC0 | (cp >> 6) as u8;
        bytes[1] = 0x80 | (cp & 0x3F) as u8;
        2
    } else if cp & !0xFFFF == 0 {
        if (0xD800..=0xDFFF).contains(&cp) {
            return Err(invalid);
        }
        bytes[0] = 0xE0 | (cp >> 12) as u8;
        bytes[1] = 0x80 | ((cp >> 6) & 0x3F) as u8;
        bytes[2] = 0x80 | (cp & 0x3F) as u8;
        3
    } else if cp <= MAX_CODE_POINT {
        bytes[0] = 0xF0 | (cp >> 18) as u8;
        bytes[1] = 0x80 | ((cp >> 12) & 0x3F) as u8;
        bytes[2] = 0x80 | ((cp >> 6) & 0x3F) as u8;
        bytes[3] = 0x80 | (cp & 0x3F) as u8;
        4
    } else {
        return Err(invalid);
    };
    Ok(EncodedChar { bytes, len })
}
