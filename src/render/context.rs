use super::{date_suffix, DiffFormat, DiffRequest, LineWriter};
use crate::error::Result;
use crate::matcher::{SequenceMatcher, Tag};
use std::fmt;
use std::hash::Hash;
use std::io;
use tracing::debug;

/// The context format, as produced by `diff -c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextFormat;

/// Formats a range the way a context hunk header expects it.
///
/// Ranges of two or more lines are `first,last` (1-based); shorter ranges
/// are just the last line number, or the line before an empty range.
pub fn format_range_context(start: usize, stop: usize) -> String {
    let length = stop - start;
    let beginning = if length == 0 { start } else { start + 1 };
    if length <= 1 {
        beginning.to_string()
    } else {
        format!("{},{}", beginning, beginning + length - 1)
    }
}

fn prefix(tag: Tag) -> &'static str {
    match tag {
        Tag::Equal => "  ",
        Tag::Replace => "! ",
        Tag::Delete => "- ",
        Tag::Insert => "+ ",
    }
}

impl DiffFormat for ContextFormat {
    fn write<W, S>(&self, out: &mut W, req: &DiffRequest<'_, S>) -> Result<()>
    where
        W: fmt::Write + ?Sized,
        S: AsRef<str> + Eq + Hash,
    {
        let matcher = SequenceMatcher::new(req.a, req.b);
        let hunks = matcher.grouped_opcodes(Some(req.context));
        debug!(hunks = hunks.len(), context = req.context, "rendering context diff");
        if hunks.is_empty() {
            return Ok(());
        }

        let mut w = LineWriter::new(out, req.line_terminator());
        if req.has_labels() {
            w.header(format_args!("*** {}{}", req.from_file, date_suffix(req.from_date)))?;
            w.header(format_args!("--- {}{}", req.to_file, date_suffix(req.to_date)))?;
        }

        for hunk in &hunks {
            w.header(format_args!("***************"))?;

            let a_range = hunk.a_range();
            w.header(format_args!(
                "*** {} ****",
                format_range_context(a_range.start, a_range.end)
            ))?;
            if hunk.has_deletions() {
                for code in hunk.iter().filter(|c| c.tag != Tag::Insert) {
                    w.lines(prefix(code.tag), &req.a[code.a_range()])?;
                }
            }

            let b_range = hunk.b_range();
            w.header(format_args!(
                "--- {} ----",
                format_range_context(b_range.start, b_range.end)
            ))?;
            if hunk.has_insertions() {
                for code in hunk.iter().filter(|c| c.tag != Tag::Delete) {
                    w.lines(prefix(code.tag), &req.b[code.b_range()])?;
                }
            }
        }
        w.finish()?;
        Ok(())
    }
}

/// Writes a context diff to `out`.
pub fn write_context<W, S>(out: &mut W, req: &DiffRequest<'_, S>) -> Result<()>
where
    W: fmt::Write + ?Sized,
    S: AsRef<str> + Eq + Hash,
{
    ContextFormat.write(out, req)
}

/// Writes a context diff to `writer`.
pub fn write_context_io<W, S>(writer: W, req: &DiffRequest<'_, S>) -> Result<()>
where
    W: io::Write,
    S: AsRef<str> + Eq + Hash,
{
    ContextFormat.write_io(writer, req)
}

/// Renders a context diff. Equal sequences give an empty string.
pub fn context_diff<S>(req: &DiffRequest<'_, S>) -> Result<String>
where
    S: AsRef<str> + Eq + Hash,
{
    ContextFormat.render(req)
}
