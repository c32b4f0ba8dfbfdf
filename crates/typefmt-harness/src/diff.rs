//! Diff rendering for fixture comparison.

/// Render a text diff between expected and actual output.
///
/// Rendered values are usually one line, so each differing line also gets
/// a caret under the first differing character.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();
    for i in 0..expected_lines.len().max(actual_lines.len()) {
        let e = expected_lines.get(i).copied();
        let a = actual_lines.get(i).copied();
        if e == a {
            continue;
        }
        out.push_str(&format!("@@ line {} @@\n", i + 1));
        if let Some(e) = e {
            out.push_str(&format!("-{}\n", visible(e)));
        }
        if let Some(a) = a {
            out.push_str(&format!("+{}\n", visible(a)));
        }
        if let (Some(e), Some(a)) = (e, a) {
            let column = first_difference(e, a);
            out.push_str(&format!(" {}^ col {}\n", " ".repeat(column), column + 1));
        }
    }
    out
}

/// Char index of the first position where `a` and `b` disagree.
fn first_difference(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .position(|(x, y)| x != y)
        .unwrap_or_else(|| a.chars().count().min(b.chars().count()))
}

/// Make trailing padding visible.
fn visible(line: &str) -> String {
    let trimmed = line.trim_end_matches(' ');
    let trailing = line.len() - trimmed.len();
    format!("{trimmed}{}", "·".repeat(trailing))
}
