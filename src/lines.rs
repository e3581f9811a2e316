use std::borrow::Cow;

/// Splits `text` into lines that all end with `"\n"`.
///
/// Terminators stay attached to their line and the last line always gets
/// one, so `"a\nb"` and `"a\nb\n"` differ: the latter yields a trailing
/// `"\n"` line of its own.
///
/// # Examples
///
/// ```
/// use seqdiff::lines::split_lines;
///
/// assert_eq!(split_lines("foo"), vec!["foo\n"]);
/// assert_eq!(split_lines("foo\nbar\n"), vec!["foo\n", "bar\n", "\n"]);
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    split_lines_str(text).into_iter().map(Cow::into_owned).collect()
}

/// Same as [`split_lines`] but borrows from `text` where it can.
///
/// Only the final line needs a terminator appended, so it is the only one
/// that allocates.
pub fn split_lines_str(text: &str) -> Vec<Cow<'_, str>> {
    let mut lines: Vec<Cow<'_, str>> = text.split_inclusive('\n').map(Cow::Borrowed).collect();
    if text.is_empty() || text.ends_with('\n') {
        lines.push(Cow::Borrowed("\n"));
    } else if let Some(last) = lines.last_mut() {
        last.to_mut().push('\n');
    }
    lines
}

/// Strips a trailing `"\n"` or `"\r\n"` from `line`.
pub(crate) fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
