//! Invariants of the engine, checked over deterministic value sweeps.

use std::thread;

use typefmt_core::format::{IntegerStyle, Radix, render_integer};
use typefmt_core::{Arg, ArgKind, Conversion, FormatError, check, format};

fn boundary_i64() -> Vec<i64> {
    let mut values = vec![0, 1, -1, 7, -7, 9, 10, -10, 99, 100, -100, 255, 256, -256];
    for shift in [8, 15, 16, 31, 32, 47, 53, 62] {
        let p = 1_i64 << shift;
        values.extend([p - 1, p, p + 1, -p, -p - 1]);
    }
    values.extend([i64::MAX, i64::MAX - 1, i64::MIN, i64::MIN + 1]);
    values
}

#[test]
fn zero_renders_as_single_digit_with_any_flags() {
    for radix in [Radix::Binary, Radix::Octal, Radix::Decimal, Radix::Hex] {
        for upper_case in [false, true] {
            let mut out = String::new();
            let style = IntegerStyle {
                upper_case,
                ..IntegerStyle::new(radix)
            };
            render_integer(0, false, &style, &mut out);
            assert_eq!(out, "0", "{radix:?}");
        }
    }
    for template in ["%o", "%x", "%X", "%b", "%u", "%d"] {
        assert_eq!(format(template, &[Arg::Uint(0)]).unwrap(), "0");
    }
}

#[test]
fn signed_decimal_matches_std() {
    for v in boundary_i64() {
        assert_eq!(format("%d", &[Arg::Int(v)]).unwrap(), v.to_string());
        assert_eq!(format("%i", &[Arg::Int(v)]).unwrap(), v.to_string());
    }
}

#[test]
fn radices_match_std() {
    for v in boundary_i64() {
        let bits = v as u64;
        assert_eq!(format("%x", &[Arg::Int(v)]).unwrap(), format!("{bits:x}"));
        assert_eq!(format("%X", &[Arg::Int(v)]).unwrap(), format!("{bits:X}"));
        assert_eq!(format("%o", &[Arg::Int(v)]).unwrap(), format!("{bits:o}"));
        assert_eq!(format("%b", &[Arg::Int(v)]).unwrap(), format!("{bits:b}"));
        assert_eq!(format("%u", &[Arg::Int(v)]).unwrap(), bits.to_string());
    }
}

#[test]
fn width_pads_to_exactly_width_or_leaves_natural() {
    let conversions = [("", 'd'), ("", 'x'), ("", 'o'), ("", 'b'), ("+", 'd'), (" ", 'd')];
    for v in boundary_i64() {
        for (sign, conv) in conversions {
            let natural = format(&format!("%{sign}{conv}"), &[Arg::Int(v)]).unwrap();
            for width in [0_usize, 1, 5, 12, 20, 40, 70] {
                for flags in ["", "-", "0"] {
                    let widened = format!("%{sign}{flags}{width}{conv}");
                    let out = format(&widened, &[Arg::Int(v)]).unwrap();
                    if width > natural.len() {
                        assert_eq!(out.len(), width, "{widened} of {v}");
                    } else {
                        assert_eq!(out, natural, "{widened} of {v}");
                    }
                }
            }
        }
    }
}

#[test]
fn width_counts_chars_for_text() {
    for (text, width) in [("é", 4), ("日本語", 5), ("😀", 2), ("ascii", 3)] {
        let out = format(&format!("%{width}s"), &[Arg::Text(text)]).unwrap();
        assert_eq!(out.chars().count(), width.max(text.chars().count()));
        assert!(out.ends_with(text));
        let out = format(&format!("%-{width}s"), &[Arg::Text(text)]).unwrap();
        assert!(out.starts_with(text));
    }
}

#[test]
fn escapes_emit_one_trigger_and_bind_nothing() {
    for n in 0..8 {
        let template = "%%".repeat(n);
        assert_eq!(format(&template, &[]).unwrap(), "%".repeat(n));
        let with_directive = format!("{template}%d{template}");
        let out = format(&with_directive, &[Arg::Int(5)]).unwrap();
        assert_eq!(out, format!("{}5{}", "%".repeat(n), "%".repeat(n)));
    }
}

#[test]
fn argument_count_must_match_directive_count() {
    for directives in 0..5_usize {
        let template = "<%d>".repeat(directives);
        for supplied in 0..5_usize {
            let args = vec![Arg::Int(1); supplied];
            let result = format(&template, &args);
            let kinds = vec![ArgKind::SignedInt; supplied];
            let checked = check(&template, &kinds);
            if directives == supplied {
                assert_eq!(result.unwrap(), "<1>".repeat(directives));
                assert_eq!(checked, Ok(()));
            } else if directives > supplied {
                let expected = FormatError::MissingArgument {
                    directive: supplied + 1,
                };
                assert_eq!(result, Err(expected.clone()));
                assert_eq!(checked, Err(expected));
            } else {
                let expected = FormatError::UnusedArguments {
                    supplied,
                    consumed: directives,
                };
                assert_eq!(result, Err(expected.clone()));
                assert_eq!(checked, Err(expected));
            }
        }
    }
}

#[test]
fn check_agrees_with_format_on_every_pairing() {
    let samples = [
        Arg::Int(66),
        Arg::Uint(66),
        Arg::Float(2.5),
        Arg::Text("t"),
        Arg::Address(0x40),
    ];
    for value in samples {
        for conversion in Conversion::ALL {
            let template = format!("%{conversion}");
            let rendered = format(&template, &[value]);
            let checked = check(&template, &[value.kind()]);
            assert_eq!(rendered.is_ok(), checked.is_ok(), "{template} with {value:?}");
            if let Err(err) = checked {
                assert_eq!(rendered, Err(err));
            }
        }
    }
}

#[test]
fn formatting_is_idempotent() {
    let template = "%-6s|%08.3f|%+5d|%#x|%c";
    let args = [
        Arg::Text("abc"),
        Arg::Float(-2.71828),
        Arg::Int(42),
        Arg::Uint(0xCAFE),
        Arg::Uint(0x263A),
    ];
    let first = format(template, &args).unwrap();
    for _ in 0..16 {
        assert_eq!(format(template, &args).unwrap(), first);
    }
}

#[test]
fn fixed_truncates_rather_than_rounds() {
    let cases = [
        (1.999, "%.2f", "1.99"),
        (0.0, "%.3f", "0.000"),
        (-0.0, "%.1f", "-0.0"),
        (123.456, "%.0f", "123"),
        (5.0, "%10.4f", "    5.0000"),
        (-5.0, "%010.4f", "-0005.0000"),
    ];
    for (value, template, expected) in cases {
        assert_eq!(format(template, &[Arg::Float(value)]).unwrap(), expected, "{template}");
    }
}

#[test]
fn concurrent_calls_share_nothing() {
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8_i64)
            .map(|t| {
                scope.spawn(move || {
                    for i in 0..500_i64 {
                        let v = t * 1_000 + i;
                        let out = format("%d:%x:%s", &[Arg::Int(v), Arg::Int(v), Arg::Text("ok")])
                            .unwrap();
                        assert_eq!(out, format!("{v}:{v:x}:ok"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    });
}
