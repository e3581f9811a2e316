use crate::group::DEFAULT_CONTEXT;

/// Longest function-context snippet appended to a unified hunk header.
pub const DEFAULT_SNIPPET_WIDTH: usize = 80;

/// Everything a renderer needs to produce one diff.
///
/// `a` and `b` are expected to be line-split already (see
/// [`split_lines`](crate::lines::split_lines)); lines are written as given,
/// terminators included. Empty labels are treated as absent.
#[derive(Debug)]
pub struct DiffRequest<'a, S> {
    pub a: &'a [S],
    pub b: &'a [S],
    pub from_file: &'a str,
    pub from_date: &'a str,
    pub to_file: &'a str,
    pub to_date: &'a str,
    /// Unchanged lines shown around each change.
    pub context: usize,
    /// Terminator for header lines, `"\n"` when empty.
    pub eol: &'a str,
    /// Maximum characters of the `@@` function-context snippet.
    pub snippet_width: usize,
}

impl<'a, S> DiffRequest<'a, S> {
    pub fn new(a: &'a [S], b: &'a [S]) -> Self {
        DiffRequest {
            a,
            b,
            from_file: "",
            from_date: "",
            to_file: "",
            to_date: "",
            context: DEFAULT_CONTEXT,
            eol: "\n",
            snippet_width: DEFAULT_SNIPPET_WIDTH,
        }
    }

    pub fn from_file(mut self, label: &'a str) -> Self {
        self.from_file = label;
        self
    }

    pub fn from_date(mut self, date: &'a str) -> Self {
        self.from_date = date;
        self
    }

    pub fn to_file(mut self, label: &'a str) -> Self {
        self.to_file = label;
        self
    }

    pub fn to_date(mut self, date: &'a str) -> Self {
        self.to_date = date;
        self
    }

    pub fn context(mut self, lines: usize) -> Self {
        self.context = lines;
        self
    }

    pub fn eol(mut self, eol: &'a str) -> Self {
        self.eol = eol;
        self
    }

    pub fn snippet_width(mut self, width: usize) -> Self {
        self.snippet_width = width;
        self
    }

    pub(crate) fn line_terminator(&self) -> &'a str {
        if self.eol.is_empty() {
            "\n"
        } else {
            self.eol
        }
    }

    pub(crate) fn has_labels(&self) -> bool {
        !self.from_file.is_empty() || !self.to_file.is_empty()
    }
}
