//! Small string primitives: case, trim, pad, reverse, split.
//!
//! Widths and reversal operate on `char`s. Case conversion touches ASCII
//! letters only; everything else passes through unchanged.

/// Characters stripped by the `trim` family when no set is given.
pub const DEFAULT_TRIM: &str = " \t\r\n";

#[must_use]
pub fn lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

#[must_use]
pub fn upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Strip leading characters contained in `chars`.
#[must_use]
pub fn ltrim<'a>(s: &'a str, chars: &str) -> &'a str {
    s.trim_start_matches(|c: char| chars.contains(c))
}

/// Strip trailing characters contained in `chars`.
#[must_use]
pub fn rtrim<'a>(s: &'a str, chars: &str) -> &'a str {
    s.trim_end_matches(|c: char| chars.contains(c))
}

#[must_use]
pub fn trim<'a>(s: &'a str, chars: &str) -> &'a str {
    ltrim(rtrim(s, chars), chars)
}

/// Prepend `fill` until `s` is `width` chars wide. Never truncates.
#[must_use]
pub fn pad_left(s: &str, width: usize, fill: char) -> String {
    let missing = width.saturating_sub(s.chars().count());
    let mut out = String::with_capacity(s.len() + missing * fill.len_utf8());
    out.extend(core::iter::repeat_n(fill, missing));
    out.push_str(s);
    out
}

/// Append `fill` until `s` is `width` chars wide. Never truncates.
#[must_use]
pub fn pad_right(s: &str, width: usize, fill: char) -> String {
    let missing = width.saturating_sub(s.chars().count());
    let mut out = String::with_capacity(s.len() + missing * fill.len_utf8());
    out.push_str(s);
    out.extend(core::iter::repeat_n(fill, missing));
    out
}

#[must_use]
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Split on every `delim`, keeping empty pieces.
///
/// Always returns one more piece than there are delimiters.
#[must_use]
pub fn split(s: &str, delim: char) -> Vec<&str> {
    s.split(delim).collect()
}
