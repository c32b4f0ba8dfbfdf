//! Directive parser.
//!
//! Grammar, starting at the trigger character:
//!
//! ```text
//! directive   := TRIGGER flags* width? ('.' precision?)? conversion
//! flags       := '-' | '+' | ' ' | '#' | '0'
//! width       := digit+
//! precision   := digit+
//! conversion  := 'c'|'d'|'i'|'u'|'o'|'x'|'X'|'b'|'f'|'s'|'p'
//! ```
//!
//! Parsing is purely syntactic: argument values are never inspected here.

use core::fmt;

use crate::config::FormatOptions;
use crate::error::FormatError;
use crate::format::arg::ArgKind;

// ---------------------------------------------------------------------------
// Directive types
// ---------------------------------------------------------------------------

/// Conversion letter terminating a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    Char,        // 'c'
    Decimal,     // 'd'
    Integer,     // 'i'
    Unsigned,    // 'u'
    Octal,       // 'o'
    HexLower,    // 'x'
    HexUpper,    // 'X'
    Binary,      // 'b'
    Fixed,       // 'f'
    Str,         // 's'
    Pointer,     // 'p'
}

impl Conversion {
    pub const ALL: [Self; 11] = [
        Self::Char,
        Self::Decimal,
        Self::Integer,
        Self::Unsigned,
        Self::Octal,
        Self::HexLower,
        Self::HexUpper,
        Self::Binary,
        Self::Fixed,
        Self::Str,
        Self::Pointer,
    ];

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'c' => Self::Char,
            'd' => Self::Decimal,
            'i' => Self::Integer,
            'u' => Self::Unsigned,
            'o' => Self::Octal,
            'x' => Self::HexLower,
            'X' => Self::HexUpper,
            'b' => Self::Binary,
            'f' => Self::Fixed,
            's' => Self::Str,
            'p' => Self::Pointer,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Char => 'c',
            Self::Decimal => 'd',
            Self::Integer => 'i',
            Self::Unsigned => 'u',
            Self::Octal => 'o',
            Self::HexLower => 'x',
            Self::HexUpper => 'X',
            Self::Binary => 'b',
            Self::Fixed => 'f',
            Self::Str => 's',
            Self::Pointer => 'p',
        }
    }

    /// Compatibility table between argument kinds and conversions.
    ///
    /// Every pairing not listed here is a [`FormatError::TypeMismatch`].
    #[must_use]
    pub const fn accepts(self, kind: ArgKind) -> bool {
        match kind {
            ArgKind::SignedInt | ArgKind::UnsignedInt => {
                !matches!(self, Self::Fixed | Self::Pointer)
            }
            ArgKind::Float => matches!(self, Self::Fixed | Self::Str),
            ArgKind::Text => matches!(self, Self::Str | Self::Pointer),
            ArgKind::Address => matches!(self, Self::Pointer),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// How a non-negative signed value announces its sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignMode {
    #[default]
    None,
    /// `+`: always print a sign.
    Always,
    /// ` `: a space where `+` would go.
    Space,
}

/// A parsed directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub conversion: Conversion,
    pub align_left: bool, // '-'
    pub sign: SignMode,   // '+' / ' '
    pub alternate: bool,  // '#', recorded only
    pub zero_pad: bool,   // '0', cleared by '-'
    /// Minimum field width; 0 means none.
    pub width: usize,
    /// `Some` iff a `.` was present.
    pub precision: Option<usize>,
}

impl Directive {
    /// A bare directive (`%<letter>`) with no flags, width or precision.
    #[must_use]
    pub const fn new(conversion: Conversion) -> Self {
        Self {
            conversion,
            align_left: false,
            sign: SignMode::None,
            alternate: false,
            zero_pad: false,
            width: 0,
            precision: None,
        }
    }

    #[must_use]
    pub const fn has_precision(&self) -> bool {
        self.precision.is_some()
    }

    #[must_use]
    pub const fn precision_or(&self, default: usize) -> usize {
        match self.precision {
            Some(p) => p,
            None => default,
        }
    }

    /// Fill character for right-aligned fields.
    #[must_use]
    pub const fn fill(&self) -> char {
        if self.zero_pad && !self.align_left {
            '0'
        } else {
            ' '
        }
    }
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse one directive whose trigger sits at byte `start` of `template`.
///
/// Returns the directive and the number of bytes consumed, trigger and
/// conversion letter included.
pub fn parse_directive(
    template: &str,
    start: usize,
    options: &FormatOptions,
) -> Result<(Directive, usize), FormatError> {
    let bytes = template.as_bytes();
    let len = bytes.len();
    let malformed = |offset: usize| FormatError::MalformedDirective { offset };

    // The trigger is ASCII (enforced by FormatOptions), so byte comparison is exact.
    if start >= len || bytes[start] != options.trigger_byte() {
        return Err(malformed(start));
    }
    let mut pos = start + 1;

    // --- flags ---
    let mut align_left = false;
    let mut force_sign = false;
    let mut space_sign = false;
    let mut alternate = false;
    let mut zero_pad = false;
    while pos < len {
        match bytes[pos] {
            b'-' => align_left = true,
            b'+' => force_sign = true,
            b' ' => space_sign = true,
            b'#' => alternate = true,
            b'0' => zero_pad = true,
            _ => break,
        }
        pos += 1;
    }
    // '+' overrides ' '; '-' overrides '0'.
    let sign = if force_sign {
        SignMode::Always
    } else if space_sign {
        SignMode::Space
    } else {
        SignMode::None
    };
    if align_left {
        zero_pad = false;
    }

    // --- width ---
    let (width, next) = scan_number(bytes, pos, options.max_width)?;
    pos = next;

    // --- precision ---
    let precision = if pos < len && bytes[pos] == b'.' {
        let (p, next) = scan_number(bytes, pos + 1, options.max_width)?;
        pos = next;
        Some(p)
    } else {
        None
    };

    // --- conversion ---
    let Some(letter) = template.get(pos..).and_then(|rest| rest.chars().next()) else {
        return Err(malformed(start));
    };
    let Some(conversion) = Conversion::from_char(letter) else {
        return Err(FormatError::UnknownConversion {
            conversion: letter,
            offset: pos,
        });
    };
    pos += 1;

    Ok((
        Directive {
            conversion,
            align_left,
            sign,
            alternate,
            zero_pad,
            width,
            precision,
        },
        pos - start,
    ))
}

/// Consume the maximal digit run at `pos`. An empty run yields 0.
fn scan_number(bytes: &[u8], mut pos: usize, limit: usize) -> Result<(usize, usize), FormatError> {
    let mut value = 0_usize;
    let mut overflowed = false;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        let digit = usize::from(bytes[pos] - b'0');
        match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
            Some(v) => value = v,
            None => overflowed = true,
        }
        pos += 1;
    }
    if overflowed {
        return Err(FormatError::FieldTooWide {
            requested: usize::MAX,
            limit,
        });
    }
    if value > limit {
        return Err(FormatError::FieldTooWide {
            requested: value,
            limit,
        });
    }
    Ok((value, pos))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
