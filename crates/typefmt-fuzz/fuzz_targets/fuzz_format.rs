#![no_main]
use libfuzzer_sys::fuzz_target;
use typefmt_core::{Arg, ArgKind, FormatError, check, format, segments};

fuzz_target!(|data: &[u8]| {
    // Arbitrary templates must produce Ok or a typed error, never a panic.
    let Ok(template) = std::str::from_utf8(data) else {
        return;
    };

    let args = [
        Arg::Int(-42),
        Arg::Uint(0x1F600),
        Arg::Float(-1.5),
        Arg::Text("fuzz"),
        Arg::Address(0xdead),
    ];
    let directives = segments(template, &Default::default())
        .take_while(Result::is_ok)
        .filter(|s| matches!(s, Ok(typefmt_core::Segment::Directive(_))))
        .count();

    for arg in args {
        let bound = vec![arg; directives];
        let kinds: Vec<ArgKind> = bound.iter().map(Arg::kind).collect();
        let rendered = format(template, &bound);
        let checked = check(template, &kinds);
        match (&rendered, &checked) {
            (Ok(_), Ok(())) => {}
            // Value-dependent, so check may pass or stop at a later directive.
            (Err(FormatError::InvalidCodePoint { .. }), _) => {}
            (Err(a), Err(b)) => assert_eq!(a, b),
            _ => panic!("format and check disagree on {template:?}: {rendered:?} vs {checked:?}"),
        }
    }
});
