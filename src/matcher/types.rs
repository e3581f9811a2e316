use std::fmt;
use std::ops::Range;

/// A matching block: `a[a..a + size] == b[b..b + size]`.
///
/// The list returned by `SequenceMatcher::matching_blocks` always ends with
/// the sentinel `Match { a: a.len(), b: b.len(), size: 0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

impl Match {
    pub fn new(a: usize, b: usize, size: usize) -> Self {
        Match { a, b, size }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// What an opcode does to turn its slice of `a` into its slice of `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `a[i1..i2] == b[j1..j2]`
    Equal,
    /// `a[i1..i2]` is replaced by `b[j1..j2]`
    Replace,
    /// `a[i1..i2]` is removed, `j1 == j2`
    Delete,
    /// `b[j1..j2]` is added at `a[i1]`, `i1 == i2`
    Insert,
}

impl Tag {
    /// Single letter code, `e`, `r`, `d` or `i`.
    pub fn code(self) -> char {
        match self {
            Tag::Equal => 'e',
            Tag::Replace => 'r',
            Tag::Delete => 'd',
            Tag::Insert => 'i',
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Equal => "equal",
            Tag::Replace => "replace",
            Tag::Delete => "delete",
            Tag::Insert => "insert",
        };
        f.write_str(name)
    }
}

/// An edit operation over `a[i1..i2]` and `b[j1..j2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpCode {
    pub tag: Tag,
    pub i1: usize,
    pub i2: usize,
    pub j1: usize,
    pub j2: usize,
}

impl OpCode {
    pub fn new(tag: Tag, i1: usize, i2: usize, j1: usize, j2: usize) -> Self {
        OpCode { tag, i1, i2, j1, j2 }
    }

    pub fn a_range(&self) -> Range<usize> {
        self.i1..self.i2
    }

    pub fn b_range(&self) -> Range<usize> {
        self.j1..self.j2
    }
}
