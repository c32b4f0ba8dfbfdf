//! Integer rendering in radix 2, 8, 10 or 16.
//!
//! Works on a magnitude plus a separate negative flag so that `i64::MIN`
//! needs no special casing. Output is bounded by `max(width, 65)` bytes.

use crate::format::directive::SignMode;

/// Numeric base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary = 2,
    Octal = 8,
    Decimal = 10,
    Hex = 16,
}

impl Radix {
    #[must_use]
    pub const fn base(self) -> u64 {
        self as u64
    }
}

/// Layout knobs for [`render_integer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerStyle {
    pub radix: Radix,
    pub upper_case: bool,
    /// Ignored by unsigned conversions, which pass `SignMode::None`.
    pub sign: SignMode,
    /// `'0'` fills between sign and digits; anything else fills before the sign.
    pub pad: char,
    pub width: usize,
    pub align_left: bool,
}

impl IntegerStyle {
    /// Plain style: no sign flag, no width, space fill.
    #[must_use]
    pub const fn new(radix: Radix) -> Self {
        Self {
            radix,
            upper_case: false,
            sign: SignMode::None,
            pad: ' ',
            width: 0,
            align_left: false,
        }
    }
}

/// Render `magnitude` (negated when `is_negative`) into `out`.
pub fn render_integer(magnitude: u64, is_negative: bool, style: &IntegerStyle, out: &mut String) {
    let mut digits = [0u8; 64];
    let digit_count = render_digits(magnitude, style.radix.base(), style.upper_case, &mut digits);
    // Digits are ASCII.
    let digit_str = core::str::from_utf8(&digits[64 - digit_count..]).unwrap_or("0");
    lay_out_digits(digit_str, is_negative, style, out);
}

/// Apply sign, fill and alignment from `style` to an already rendered digit run.
///
/// `style.radix` and `style.upper_case` are not consulted.
pub(crate) fn lay_out_digits(digits: &str, is_negative: bool, style: &IntegerStyle, out: &mut String) {
    let sign = if is_negative {
        Some('-')
    } else {
        match style.sign {
            SignMode::Always => Some('+'),
            SignMode::Space => Some(' '),
            SignMode::None => None,
        }
    };

    let content_len = usize::from(sign.is_some()) + digits.len();
    let pad_total = style.width.saturating_sub(content_len);
    let zero_fill = style.pad == '0' && !style.align_left;

    out.reserve(content_len + pad_total);
    if !style.align_left && !zero_fill {
        pad(out, style.pad, pad_total);
    }
    if let Some(s) = sign {
        out.push(s);
    }
    if zero_fill {
        pad(out, '0', pad_total);
    }
    out.push_str(digits);
    if style.align_left {
        pad(out, ' ', pad_total);
    }
}

/// Render `value` in the given `base` into the END of `buf`.
/// Returns the number of digits written.
fn render_digits(mut value: u64, base: u64, uppercase: bool, buf: &mut [u8; 64]) -> usize {
    if value == 0 {
        buf[63] = b'0';
        return 1;
    }
    let alpha = if uppercase { b'A' } else { b'a' };
    let mut pos = 64;
    while value > 0 {
        pos -= 1;
        let digit = (value % base) as u8;
        buf[pos] = if digit < 10 {
            b'0' + digit
        } else {
            alpha + (digit - 10)
        };
        value /= base;
    }
    64 - pos
}

pub(crate) fn pad(out: &mut String, fill: char, count: usize) {
    out.extend(core::iter::repeat_n(fill, count));
}
