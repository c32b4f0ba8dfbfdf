//! End-to-end scenarios through the public `format` entry point.

use typefmt_core::format::{IntegerStyle, Radix, render_integer};
use typefmt_core::{Arg, ArgKind, Conversion, FormatError, FormatOptions, Formatter, format, typed_format};

#[test]
fn zero_padded_negative_decimal() {
    assert_eq!(
        format("d=[%012d]", &[Arg::Int(-123)]).unwrap(),
        "d=[-00000000123]"
    );
}

#[test]
fn octal() {
    assert_eq!(format("o=[%o]", &[Arg::Int(511)]).unwrap(), "o=[777]");
}

#[test]
fn zero_padded_binary() {
    assert_eq!(format("b=[%08b]", &[Arg::Int(127)]).unwrap(), "b=[01111111]");
}

#[test]
fn right_aligned_text() {
    assert_eq!(
        format("s=[%7s]", &[Arg::Text("hello")]).unwrap(),
        "s=[  hello]"
    );
}

#[test]
fn left_aligned_fixed() {
    assert_eq!(
        format("f=[%-8.2f]", &[Arg::Float(-123.123)]).unwrap(),
        "f=[-123.12 ]"
    );
}

#[test]
fn zero_padded_hex() {
    assert_eq!(format("x=[%04x]", &[Arg::Int(255)]).unwrap(), "x=[00ff]");
}

#[test]
fn float_under_integer_conversion_is_rejected() {
    assert_eq!(
        format("%d", &[Arg::Float(3.14)]),
        Err(FormatError::TypeMismatch(ArgKind::Float, Conversion::Decimal))
    );
}

#[test]
fn macro_converts_native_values() {
    let name = String::from("widget");
    let out = typed_format!("[%-8s|%5u|%+d|%c|%X]", &name, 42_u16, -7_i32, 'Ω', 48879_u32).unwrap();
    assert_eq!(out, "[widget  |   42|-7|Ω|BEEF]");
    assert_eq!(typed_format!("plain").unwrap(), "plain");
    assert_eq!(typed_format!("%d%%", 100).unwrap(), "100%");
}

#[test]
fn macro_reports_mismatches() {
    assert_eq!(
        typed_format!("%x", "ff"),
        Err(FormatError::TypeMismatch(ArgKind::Text, Conversion::HexLower))
    );
}

#[test]
fn pointer_from_reference() {
    let value = 17_u64;
    let ptr: *const u64 = &value;
    let out = format("at %p", &[Arg::address(ptr)]).unwrap();
    assert_eq!(out, format!("at 0x{:x}", ptr as usize));
}

#[test]
fn character_conversion_emits_utf8() {
    let out = format("%c%c%c%c", &[
        Arg::Uint(0x41),
        Arg::Uint(0xE9),
        Arg::Uint(0x20AC),
        Arg::Uint(0x1_F600),
    ])
    .unwrap();
    assert_eq!(out, "Aé€😀");
}

#[test]
fn custom_trigger_leaves_percent_alone() {
    let options = FormatOptions::default().with_trigger('~').unwrap();
    let out = Formatter::new(options)
        .format("100% ~d~~ of ~s", &[Arg::Int(3), Arg::Text("ten")])
        .unwrap();
    assert_eq!(out, "100% 3~ of ten");
}

#[test]
fn width_limit_is_enforced() {
    let options = FormatOptions::default().with_max_width(32).unwrap();
    let formatter = Formatter::new(options);
    assert!(formatter.format("%32d", &[Arg::Int(1)]).is_ok());
    assert_eq!(
        formatter.format("%33d", &[Arg::Int(1)]),
        Err(FormatError::FieldTooWide {
            requested: 33,
            limit: 32
        })
    );
    assert_eq!(
        formatter.format("%.40f", &[Arg::Float(1.0)]),
        Err(FormatError::FieldTooWide {
            requested: 40,
            limit: 32
        })
    );
}

#[test]
fn numeric_renderer_is_usable_standalone() {
    let style = IntegerStyle {
        pad: '0',
        width: 6,
        ..IntegerStyle::new(Radix::Hex)
    };
    let mut out = String::from("0x");
    render_integer(0xBEEF, false, &style, &mut out);
    assert_eq!(out, "0x00beef");
}

#[test]
fn error_codes_are_reported_per_kind() {
    let cases: [(&str, &[Arg<'_>], &str); 7] = [
        ("%", &[], "MalformedDirective"),
        ("%k", &[Arg::Int(1)], "UnknownConversion"),
        ("%f", &[Arg::Int(1)], "TypeMismatch"),
        ("%c", &[Arg::Int(-5)], "InvalidCodePoint"),
        ("%d %d", &[Arg::Int(1)], "MissingArgument"),
        ("%d", &[Arg::Int(1), Arg::Int(2)], "UnusedArguments"),
        ("%9999999d", &[Arg::Int(1)], "FieldTooWide"),
    ];
    for (template, args, code) in cases {
        let err = format(template, args).unwrap_err();
        assert_eq!(err.code(), code, "template {template:?}");
    }
}
