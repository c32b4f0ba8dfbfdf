//! Serializable view of a scanned template, for `harness parse`.

use serde::Serialize;
use typefmt_core::format::SignMode;
use typefmt_core::{FormatError, FormatOptions, Segment, segments};

/// One template segment as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "segment", rename_all = "snake_case")]
pub enum SegmentView {
    Literal {
        offset: usize,
        text: String,
    },
    EscapedTrigger {
        offset: usize,
    },
    Directive {
        offset: usize,
        source: String,
        conversion: char,
        align_left: bool,
        sign: &'static str,
        alternate: bool,
        zero_pad: bool,
        width: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        precision: Option<usize>,
    },
    Error {
        code: &'static str,
        message: String,
    },
}

/// Scan `template` into views. A parse error becomes the final element.
#[must_use]
pub fn describe(template: &str, options: &FormatOptions) -> Vec<SegmentView> {
    let mut scan = segments(template, options);
    let mut views = Vec::new();
    loop {
        let offset = scan.offset();
        let Some(item) = scan.next() else {
            break;
        };
        views.push(match item {
            Ok(Segment::Literal(text)) => SegmentView::Literal {
                offset,
                text: text.to_string(),
            },
            Ok(Segment::EscapedTrigger) => SegmentView::EscapedTrigger { offset },
            Ok(Segment::Directive(d)) => SegmentView::Directive {
                offset,
                source: template[offset..scan.offset()].to_string(),
                conversion: d.conversion.letter(),
                align_left: d.align_left,
                sign: sign_name(d.sign),
                alternate: d.alternate,
                zero_pad: d.zero_pad,
                width: d.width,
                precision: d.precision,
            },
            Err(err) => error_view(&err),
        });
    }
    views
}

fn error_view(err: &FormatError) -> SegmentView {
    SegmentView::Error {
        code: err.code(),
        message: err.to_string(),
    }
}

const fn sign_name(sign: SignMode) -> &'static str {
    match sign {
        SignMode::None => "none",
        SignMode::Always => "always",
        SignMode::Space => "space",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_each_segment_kind() {
        let views = describe("v=%-+08.3f %%", &FormatOptions::default());
        assert_eq!(views.len(), 4);
        assert_eq!(
            views[1],
            SegmentView::Directive {
                offset: 2,
                source: "%-+08.3f".to_string(),
                conversion: 'f',
                align_left: true,
                sign: "always",
                alternate: false,
                zero_pad: false,
                width: 8,
                precision: Some(3),
            }
        );
        assert_eq!(views[3], SegmentView::EscapedTrigger { offset: 11 });
    }

    #[test]
    fn error_is_last_view() {
        let views = describe("ab%q", &FormatOptions::default());
        assert_eq!(views.len(), 2);
        let json = serde_json::to_value(&views[1]).unwrap();
        assert_eq!(json["segment"], "error");
        assert_eq!(json["code"], "UnknownConversion");
    }

    #[test]
    fn json_shape() {
        let views = describe("%x", &FormatOptions::default());
        let json = serde_json::to_value(&views).unwrap();
        assert_eq!(json[0]["segment"], "directive");
        assert_eq!(json[0]["conversion"], "x");
        assert!(json[0].get("precision").is_none());
    }
}
