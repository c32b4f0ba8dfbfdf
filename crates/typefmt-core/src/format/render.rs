//! Value renderer: one directive plus one argument to text.
//!
//! Dispatch is a match over `(argument, conversion)`. Pairings missing from
//! [`Conversion::accepts`] fall through to [`FormatError::TypeMismatch`];
//! nothing is ever reinterpreted across kinds.

use crate::config::FormatOptions;
use crate::error::FormatError;
use crate::format::arg::Arg;
use crate::format::directive::{Conversion, Directive, SignMode};
use crate::format::numeric::{IntegerStyle, Radix, lay_out_digits, render_integer};
use crate::format::utf8;
use crate::text::{pad_left, pad_right};

/// Fractional digits beyond this many are printed as `0`.
pub const MAX_FRACTION_DIGITS: usize = 18;

/// 2^64 as f64; integer parts at or above this take the wide path.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Render `value` according to `directive`, appending to `out`.
///
/// On error `out` may hold a partial fragment; the driver discards it.
pub fn render_value(
    directive: &Directive,
    value: &Arg<'_>,
    options: &FormatOptions,
    out: &mut String,
) -> Result<(), FormatError> {
    check_bounds(directive, options)?;

    match (*value, directive.conversion) {
        (Arg::Int(v), Conversion::Char) => render_char(i128::from(v), directive, out),
        (Arg::Uint(v), Conversion::Char) => render_char(i128::from(v), directive, out),

        (Arg::Int(v), Conversion::Decimal | Conversion::Integer | Conversion::Str) => {
            render_integer(v.unsigned_abs(), v < 0, &signed_style(directive), out);
            Ok(())
        }
        (Arg::Uint(v), Conversion::Decimal | Conversion::Integer | Conversion::Str) => {
            render_integer(v, false, &signed_style(directive), out);
            Ok(())
        }
        // Unsigned conversions see the two's-complement bit pattern.
        (
            Arg::Int(v),
            conv @ (Conversion::Unsigned
            | Conversion::Octal
            | Conversion::HexLower
            | Conversion::HexUpper
            | Conversion::Binary),
        ) => {
            render_integer(v as u64, false, &unsigned_style(directive, conv), out);
            Ok(())
        }
        (
            Arg::Uint(v),
            conv @ (Conversion::Unsigned
            | Conversion::Octal
            | Conversion::HexLower
            | Conversion::HexUpper
            | Conversion::Binary),
        ) => {
            render_integer(v, false, &unsigned_style(directive, conv), out);
            Ok(())
        }

        (Arg::Float(v), Conversion::Fixed | Conversion::Str) => {
            check_fixed_precision(directive, options)?;
            render_fixed(v, directive, options, out);
            Ok(())
        }

        (Arg::Text(s), Conversion::Str) => {
            pad_text(s, directive, out);
            Ok(())
        }
        (Arg::Text(s), Conversion::Pointer) => {
            render_address(s.as_ptr() as usize, out);
            Ok(())
        }
        (Arg::Address(addr), Conversion::Pointer) => {
            render_address(addr, out);
            Ok(())
        }

        (other, conversion) => Err(FormatError::TypeMismatch(other.kind(), conversion)),
    }
}

/// Pad `s` to the directive's width: spaces on the right when left-aligned,
/// otherwise the directive's fill on the left. Longer text is untouched.
pub fn pad_text(s: &str, directive: &Directive, out: &mut String) {
    if s.chars().count() >= directive.width {
        out.push_str(s);
    } else if directive.align_left {
        out.push_str(&pad_right(s, directive.width, ' '));
    } else {
        out.push_str(&pad_left(s, directive.width, directive.fill()));
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn check_bounds(directive: &Directive, options: &FormatOptions) -> Result<(), FormatError> {
    let widest = directive.width.max(directive.precision.unwrap_or(0));
    if widest > options.max_width {
        return Err(FormatError::FieldTooWide {
            requested: widest,
            limit: options.max_width,
        });
    }
    Ok(())
}

/// Bound the precision fixed notation will actually use, which may come
/// from [`FormatOptions::default_precision`] rather than the directive.
pub(crate) fn check_fixed_precision(
    directive: &Directive,
    options: &FormatOptions,
) -> Result<(), FormatError> {
    let precision = directive.precision_or(options.default_precision);
    if precision > options.max_width {
        return Err(FormatError::FieldTooWide {
            requested: precision,
            limit: options.max_width,
        });
    }
    Ok(())
}

fn signed_style(directive: &Directive) -> IntegerStyle {
    IntegerStyle {
        radix: Radix::Decimal,
        upper_case: false,
        sign: directive.sign,
        pad: directive.fill(),
        width: directive.width,
        align_left: directive.align_left,
    }
}

fn unsigned_style(directive: &Directive, conversion: Conversion) -> IntegerStyle {
    let (radix, upper_case) = match conversion {
        Conversion::Octal => (Radix::Octal, false),
        Conversion::HexLower => (Radix::Hex, false),
        Conversion::HexUpper => (Radix::Hex, true),
        Conversion::Binary => (Radix::Binary, false),
        _ => (Radix::Decimal, false),
    };
    IntegerStyle {
        radix,
        upper_case,
        sign: SignMode::None,
        pad: directive.fill(),
        width: directive.width,
        align_left: directive.align_left,
    }
}

fn render_char(value: i128, directive: &Directive, out: &mut String) -> Result<(), FormatError> {
    let code_point =
        u32::try_from(value).map_err(|_| FormatError::InvalidCodePoint { value })?;
    let encoded = utf8::encode(code_point)?;
    pad_text(encoded.as_str(), directive, out);
    Ok(())
}

/// `0x` followed by lowercase hex; width and alignment do not apply.
fn render_address(addr: usize, out: &mut String) {
    out.push_str("0x");
    render_integer(addr as u64, false, &IntegerStyle::new(Radix::Hex), out);
}

/// Fixed notation with truncated (not rounded) fractional digits.
fn render_fixed(value: f64, directive: &Directive, options: &FormatOptions, out: &mut String) {
    if !value.is_finite() {
        render_non_finite(value, directive, out);
        return;
    }

    let precision = directive.precision_or(options.default_precision);
    let negative = value.is_sign_negative();
    let abs = value.abs();
    let int_part = abs.trunc();
    let frac_len = if precision == 0 { 0 } else { precision + 1 };

    // Integer part gets whatever width the fraction leaves over.
    let int_style = IntegerStyle {
        width: if directive.align_left {
            0
        } else {
            directive.width.saturating_sub(frac_len)
        },
        align_left: false,
        ..signed_style(directive)
    };

    let mut body = String::with_capacity(directive.width.max(24) + frac_len);
    if int_part < U64_LIMIT {
        render_integer(int_part as u64, negative, &int_style, &mut body);
    } else {
        // Integral f64 values print exactly with `{:.0}`.
        lay_out_digits(&format!("{int_part:.0}"), negative, &int_style, &mut body);
    }

    if precision > 0 {
        body.push('.');
        let shown = precision.min(MAX_FRACTION_DIGITS);
        let scale = 10_u64.pow(shown as u32);
        let scaled = ((abs - int_part) * scale as f64).trunc() as u64;
        let frac_style = IntegerStyle {
            pad: '0',
            width: shown,
            ..IntegerStyle::new(Radix::Decimal)
        };
        render_integer(scaled.min(scale - 1), false, &frac_style, &mut body);
        body.extend(core::iter::repeat_n('0', precision - shown));
    }

    pad_text(&body, directive, out);
}

fn render_non_finite(value: f64, directive: &Directive, out: &mut String) {
    let text = if value.is_nan() {
        "nan"
    } else if value.is_sign_negative() {
        "-inf"
    } else {
        match directive.sign {
            SignMode::Always => "+inf",
            SignMode::Space => " inf",
            SignMode::None => "inf",
        }
    };
    // Zero fill is meaningless here.
    let spaced = Directive {
        zero_pad: false,
        ..*directive
    };
    pad_text(text, &spaced, out);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
