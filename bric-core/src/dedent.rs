//! Indentation normalization for multi-line text.
//!
//! The whole family shares one algorithm: compute the minimum leading
//! whitespace over the non-blank lines, drop fully-blank edge lines, and
//! strip that common indent from every retained line. The `_raw`
//! variants skip backslash-escape interpretation; everything else is
//! identical.

/// Escape handling applied to literal text before analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EscapeMode {
    /// Interpret backslash escape sequences.
    Interpret,
    /// Leave backslashes untouched.
    Preserve,
}

/// Removes the common leading whitespace from every line and trims
/// blank edge lines.
///
/// Backslash escape sequences in the input are interpreted first
/// (`\n`, `\r`, `\t`, `\0`, `\\`; any other escaped character keeps the
/// character and drops the backslash). Use [`dedent_raw`] to keep
/// backslashes literal.
///
/// # Example
///
/// ```
/// use bric_core::dedent;
///
/// let text = "
///       hello
///         world
///           !
///     ";
/// assert_eq!(dedent(text), "hello\n  world\n    !");
/// ```
pub fn dedent(text: &str) -> String {
    dedent_impl(text, EscapeMode::Interpret)
}

/// [`dedent`] without escape-sequence interpretation, preserving
/// literal backslashes.
///
/// # Example
///
/// ```
/// use bric_core::dedent_raw;
///
/// assert_eq!(dedent_raw(r"  /\d+/"), r"/\d+/");
/// ```
pub fn dedent_raw(text: &str) -> String {
    dedent_impl(text, EscapeMode::Preserve)
}

/// Interleaves literal `parts` with interpolated `values` and dedents
/// the result.
///
/// Segments follow template order: `parts[0]`, `values[0]`, `parts[1]`,
/// and so on. Escapes are interpreted in the literal parts only; the
/// interpolated values are inserted verbatim before indentation
/// analysis.
///
/// # Example
///
/// ```
/// use bric_core::dedent_parts;
///
/// let out = dedent_parts(&["\n  hello\n    ", "\n  "], &["world"]);
/// assert_eq!(out, "hello\n  world");
/// ```
pub fn dedent_parts(parts: &[&str], values: &[&str]) -> String {
    normalize(&weave(parts, values, EscapeMode::Interpret))
}

/// [`dedent_parts`] without escape-sequence interpretation.
pub fn dedent_parts_raw(parts: &[&str], values: &[&str]) -> String {
    normalize(&weave(parts, values, EscapeMode::Preserve))
}

fn dedent_impl(text: &str, escapes: EscapeMode) -> String {
    match escapes {
        EscapeMode::Interpret => normalize(&unescape(text)),
        EscapeMode::Preserve => normalize(text),
    }
}

fn weave(parts: &[&str], values: &[&str], escapes: EscapeMode) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        match escapes {
            EscapeMode::Interpret => out.push_str(&unescape(part)),
            EscapeMode::Preserve => out.push_str(part),
        }
        if let Some(value) = values.get(i) {
            out.push_str(value);
        }
    }
    for value in values.iter().skip(parts.len()) {
        out.push_str(value);
    }
    out
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn normalize(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    let mut first = None;
    let mut last = 0;
    let mut common_indent = usize::MAX;
    for (i, line) in lines.iter().enumerate() {
        if is_blank(line) {
            continue;
        }
        first.get_or_insert(i);
        last = i;
        common_indent = common_indent.min(indent_width(line));
    }
    // No non-blank line at all: nothing survives edge trimming.
    let Some(first) = first else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    for (i, line) in lines[first..=last].iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(strip_indent(line, common_indent));
    }
    out
}

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Drops the first `count` characters, clamped to the line length so
/// short blank lines never underflow.
fn strip_indent(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}
