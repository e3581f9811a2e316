use crate::matcher::{OpCode, Tag};
use std::ops::Range;
use tracing::debug;

/// Equal elements kept on each side of a change when no context is given.
pub const DEFAULT_CONTEXT: usize = 3;

/// A run of opcodes shown together in one section of a diff.
///
/// Leading and trailing `Equal` opcodes hold at most `context` elements, and
/// a hunk is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    opcodes: Vec<OpCode>,
}

impl Hunk {
    pub fn opcodes(&self) -> &[OpCode] {
        &self.opcodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OpCode> {
        self.opcodes.iter()
    }

    fn first(&self) -> &OpCode {
        &self.opcodes[0]
    }

    fn last(&self) -> &OpCode {
        &self.opcodes[self.opcodes.len() - 1]
    }

    /// Span of `a` covered by the hunk, context included.
    pub fn a_range(&self) -> Range<usize> {
        self.first().i1..self.last().i2
    }

    /// Span of `b` covered by the hunk, context included.
    pub fn b_range(&self) -> Range<usize> {
        self.first().j1..self.last().j2
    }

    /// Whether any element of `a` is removed or replaced.
    pub fn has_deletions(&self) -> bool {
        self.iter()
            .any(|c| matches!(c.tag, Tag::Delete | Tag::Replace))
    }

    /// Whether any element of `b` is added or replaces something.
    pub fn has_insertions(&self) -> bool {
        self.iter()
            .any(|c| matches!(c.tag, Tag::Insert | Tag::Replace))
    }
}

impl<'h> IntoIterator for &'h Hunk {
    type Item = &'h OpCode;
    type IntoIter = std::slice::Iter<'h, OpCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.opcodes.iter()
    }
}

struct HunkBuilder {
    context: usize,
    current: Vec<OpCode>,
    hunks: Vec<Hunk>,
}

impl HunkBuilder {
    fn new(context: usize) -> Self {
        HunkBuilder {
            context,
            current: vec![],
            hunks: vec![],
        }
    }

    fn process(&mut self, mut code: OpCode) {
        let n = self.context;
        // a long unchanged run ends the current hunk and seeds the next one
        if code.tag == Tag::Equal && code.i2 - code.i1 > n.saturating_mul(2) {
            self.current.push(OpCode::new(
                Tag::Equal,
                code.i1,
                code.i2.min(code.i1.saturating_add(n)),
                code.j1,
                code.j2.min(code.j1.saturating_add(n)),
            ));
            self.hunks.push(Hunk {
                opcodes: std::mem::take(&mut self.current),
            });
            code.i1 = code.i1.max(code.i2.saturating_sub(n));
            code.j1 = code.j1.max(code.j2.saturating_sub(n));
        }
        self.current.push(code);
    }

    fn finish(mut self) -> Vec<Hunk> {
        let lone_equal = self.current.len() == 1 && self.current[0].tag == Tag::Equal;
        if !self.current.is_empty() && !lone_equal {
            self.hunks.push(Hunk {
                opcodes: self.current,
            });
        }
        self.hunks
    }
}

/// Groups `codes` into hunks with up to `context` equal elements around
/// each change.
///
/// Changes closer than `2 * context` elements end up in the same hunk.
/// Returns nothing when `codes` holds no change at all.
pub fn group_opcodes(codes: &[OpCode], context: usize) -> Vec<Hunk> {
    let mut codes = codes.to_vec();
    if codes.is_empty() {
        codes.push(OpCode::new(Tag::Equal, 0, 1, 0, 1));
    }

    let n = context;
    if let Some(first) = codes.first_mut().filter(|c| c.tag == Tag::Equal) {
        first.i1 = first.i1.max(first.i2.saturating_sub(n));
        first.j1 = first.j1.max(first.j2.saturating_sub(n));
    }
    if let Some(last) = codes.last_mut().filter(|c| c.tag == Tag::Equal) {
        last.i2 = last.i2.min(last.i1.saturating_add(n));
        last.j2 = last.j2.min(last.j1.saturating_add(n));
    }

    let mut builder = HunkBuilder::new(n);
    for code in codes {
        builder.process(code);
    }
    let hunks = builder.finish();
    debug!(hunks = hunks.len(), context, "grouped opcodes");
    hunks
}
