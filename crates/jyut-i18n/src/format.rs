//! Positional placeholder substitution for translated strings.
//!
//! Catalog text uses Qt's markers: `%1`…`%99` for arguments and `%n` for
//! the count of a numerus message. Both substitutions are single-pass:
//! replacement values are never scanned again, and markers without a
//! matching argument are emitted unchanged.

/// Replace `%1`…`%99` (optionally `%L1`) with `args[0]`, `args[1]`, ….
///
/// Up to two digits are read after `%`, so `%10` is the tenth argument.
///
/// Markers are matched by their absolute number: `%N` always takes
/// `args[N - 1]`. This differs from `QString::arg`, which renumbers and
/// fills the lowest remaining markers first (`"%1 %3"` with `a`, `b` gives
/// `"a b"` there and `"a %3"` here). A translation that omits `%1` keeps
/// its other arguments in place.
///
/// ```
/// use jyut_i18n::format::arg;
///
/// assert_eq!(arg("About %1", &["Jyut Dictionary"]), "About Jyut Dictionary");
/// assert_eq!(arg("%2 / %1", &["a", "b"]), "b / a");
/// assert_eq!(arg("%3 stays", &["a"]), "%3 stays");
/// ```
#[must_use]
pub fn arg(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        match parse_marker(after) {
            Some((index, consumed)) if index >= 1 && index <= args.len() => {
                out.push_str(args[index - 1]);
                rest = &after[consumed..];
            }
            _ => {
                out.push('%');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Replace `%n` and `%Ln` with `count`.
///
/// ```
/// use jyut_i18n::format::substitute_count;
///
/// assert_eq!(substitute_count("%n words", 3), "3 words");
/// ```
#[must_use]
pub fn substitute_count(template: &str, count: i64) -> String {
    let mut out = String::with_capacity(template.len() + 4);
    let mut rest = template;
    let count = count.to_string();

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let skip = if after.starts_with('n') {
            Some(1)
        } else if after.starts_with("Ln") {
            Some(2)
        } else {
            None
        };
        match skip {
            Some(n) => {
                out.push_str(&count);
                rest = &after[n..];
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Highest `%N` marker in `template`, or 0 when there is none.
#[must_use]
pub fn max_placeholder(template: &str) -> usize {
    let mut max = 0;
    let mut rest = template;
    while let Some(pos) = rest.find('%') {
        rest = &rest[pos + 1..];
        if let Some((index, consumed)) = parse_marker(rest) {
            max = max.max(index);
            rest = &rest[consumed..];
        }
    }
    max
}

/// Parse the text after a `%`: optional `L`, then one or two digits.
fn parse_marker(after: &str) -> Option<(usize, usize)> {
    let bytes = after.as_bytes();
    let start = usize::from(bytes.first() == Some(&b'L'));
    let digits = bytes[start..]
        .iter()
        .take(2)
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    let index: usize = after[start..start + digits].parse().ok()?;
    Some((index, start + digits))
}
