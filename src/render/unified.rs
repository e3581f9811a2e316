use super::{date_suffix, DiffFormat, DiffRequest, LineWriter};
use crate::error::Result;
use crate::lines::strip_terminator;
use crate::matcher::{SequenceMatcher, Tag};
use std::fmt;
use std::hash::Hash;
use std::io;
use tracing::debug;

/// The unified format, as produced by `diff -u`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnifiedFormat;

/// Formats a range the way a unified hunk header expects it.
///
/// A single line is just its 1-based number, an empty range is the line
/// before it followed by `,0`, anything else is `first,count`.
pub fn format_range_unified(start: usize, stop: usize) -> String {
    let beginning = start + 1;
    match stop - start {
        0 => format!("{start},0"),
        1 => beginning.to_string(),
        length => format!("{beginning},{length}"),
    }
}

/// The line of `a` just above a hunk starting at `start`, cut to `width`
/// characters.
fn header_snippet<S: AsRef<str>>(a: &[S], start: usize, width: usize) -> Option<&str> {
    let line = strip_terminator(a.get(start.checked_sub(1)?)?.as_ref());
    let snippet = match line.char_indices().nth(width) {
        Some((cut, _)) => &line[..cut],
        None => line,
    };
    (!snippet.is_empty()).then_some(snippet)
}

impl DiffFormat for UnifiedFormat {
    fn write<W, S>(&self, out: &mut W, req: &DiffRequest<'_, S>) -> Result<()>
    where
        W: fmt::Write + ?Sized,
        S: AsRef<str> + Eq + Hash,
    {
        let matcher = SequenceMatcher::new(req.a, req.b);
        let hunks = matcher.grouped_opcodes(Some(req.context));
        debug!(hunks = hunks.len(), context = req.context, "rendering unified diff");
        if hunks.is_empty() {
            return Ok(());
        }

        let mut w = LineWriter::new(out, req.line_terminator());
        if req.has_labels() {
            w.header(format_args!(
                "--- a/{}{}",
                req.from_file,
                date_suffix(req.from_date)
            ))?;
            w.header(format_args!(
                "+++ b/{}{}",
                req.to_file,
                date_suffix(req.to_date)
            ))?;
        }

        for hunk in &hunks {
            let (a_range, b_range) = (hunk.a_range(), hunk.b_range());
            let ranges = format!(
                "@@ -{} +{} @@",
                format_range_unified(a_range.start, a_range.end),
                format_range_unified(b_range.start, b_range.end)
            );
            match header_snippet(req.a, a_range.start, req.snippet_width) {
                Some(snippet) => w.header(format_args!("{ranges} {snippet}"))?,
                None => w.header(format_args!("{ranges}"))?,
            }

            for code in hunk {
                let (old, new) = (&req.a[code.a_range()], &req.b[code.b_range()]);
                match code.tag {
                    Tag::Equal => w.lines(" ", old)?,
                    Tag::Delete => w.lines("-", old)?,
                    Tag::Insert => w.lines("+", new)?,
                    Tag::Replace => {
                        w.lines("-", old)?;
                        w.lines("+", new)?;
                    }
                }
            }
        }
        w.finish()?;
        Ok(())
    }
}

/// Writes a unified diff to `out`.
pub fn write_unified<W, S>(out: &mut W, req: &DiffRequest<'_, S>) -> Result<()>
where
    W: fmt::Write + ?Sized,
    S: AsRef<str> + Eq + Hash,
{
    UnifiedFormat.write(out, req)
}

/// Writes a unified diff to `writer`.
pub fn write_unified_io<W, S>(writer: W, req: &DiffRequest<'_, S>) -> Result<()>
where
    W: io::Write,
    S: AsRef<str> + Eq + Hash,
{
    UnifiedFormat.write_io(writer, req)
}

/// Renders a unified diff. Equal sequences give an empty string.
///
/// # Examples
///
/// ```
/// use seqdiff::lines::split_lines;
/// use seqdiff::render::{unified_diff, DiffRequest};
///
/// let a = split_lines("one\ntwo\nthree");
/// let b = split_lines("one\n2\nthree");
/// let req = DiffRequest::new(&a, &b).from_file("old.txt").to_file("new.txt");
/// assert_eq!(
///     unified_diff(&req).unwrap(),
///     "--- a/old.txt\n+++ b/new.txt\n@@ -1,3 +1,3 @@\n one\n-two\n+2\n three\n"
/// );
/// ```
pub fn unified_diff<S>(req: &DiffRequest<'_, S>) -> Result<String>
where
    S: AsRef<str> + Eq + Hash,
{
    UnifiedFormat.render(req)
}
