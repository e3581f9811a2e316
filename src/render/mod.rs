mod context;
mod types;
mod unified;

pub use context::*;
pub use types::*;
pub use unified::*;

use crate::error::Result;
use std::fmt;
use std::hash::Hash;
use std::io;

/// A textual patch format.
///
/// Implementors only provide [`write`](DiffFormat::write); rendering to a
/// `String` or an `io::Write` comes for free.
pub trait DiffFormat {
    /// Writes the diff described by `req` to `out`. Nothing is written when
    /// the sequences are equal.
    fn write<W, S>(&self, out: &mut W, req: &DiffRequest<'_, S>) -> Result<()>
    where
        W: fmt::Write + ?Sized,
        S: AsRef<str> + Eq + Hash;

    fn render<S>(&self, req: &DiffRequest<'_, S>) -> Result<String>
    where
        S: AsRef<str> + Eq + Hash,
    {
        let mut text = String::new();
        self.write(&mut text, req)?;
        Ok(text)
    }

    /// Renders the whole diff first, so `writer` never sees a partial diff
    /// because of a formatting failure.
    fn write_io<W, S>(&self, mut writer: W, req: &DiffRequest<'_, S>) -> Result<()>
    where
        W: io::Write,
        S: AsRef<str> + Eq + Hash,
    {
        let text = self.render(req)?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Writes diff lines and remembers whether the output currently ends with a
/// line terminator.
struct LineWriter<'w, W: ?Sized> {
    out: &'w mut W,
    eol: &'w str,
    terminated: bool,
}

impl<'w, W: fmt::Write + ?Sized> LineWriter<'w, W> {
    fn new(out: &'w mut W, eol: &'w str) -> Self {
        LineWriter {
            out,
            eol,
            terminated: true,
        }
    }

    /// Writes a header line followed by the header terminator.
    fn header(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.out.write_fmt(args)?;
        self.out.write_str(self.eol)?;
        self.terminated = true;
        Ok(())
    }

    /// Writes a content line as is, its own terminator included.
    fn line(&mut self, prefix: &str, line: &str) -> fmt::Result {
        self.out.write_str(prefix)?;
        self.out.write_str(line)?;
        self.terminated = line.ends_with('\n');
        Ok(())
    }

    fn lines<S: AsRef<str>>(&mut self, prefix: &str, lines: &[S]) -> fmt::Result {
        lines.iter().try_for_each(|l| self.line(prefix, l.as_ref()))
    }

    /// Terminates the output if the last content line had no terminator.
    fn finish(self) -> fmt::Result {
        if !self.terminated {
            self.out.write_str(self.eol)?;
        }
        Ok(())
    }
}

fn date_suffix(date: &str) -> String {
    if date.is_empty() {
        String::new()
    } else {
        format!("\t{date}")
    }
}
