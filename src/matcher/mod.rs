pub mod types;
pub use types::*;

use crate::group::{self, Hunk, DEFAULT_CONTEXT};
use ahash::{AHashMap, AHashSet};
use once_cell::sync::OnceCell;
use smallvec::SmallVec;
use std::hash::Hash;
use tracing::debug;

/// Below this length of `b` the popularity heuristic never kicks in.
pub const AUTOJUNK_MIN_LEN: usize = 200;

type Positions = SmallVec<[usize; 4]>;

fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length > 0 {
        2.0 * matches as f64 / length as f64
    } else {
        1.0
    }
}

/// Configures a [`SequenceMatcher`] before the index over `b` is built.
pub struct MatcherBuilder<'a, T> {
    a: &'a [T],
    b: &'a [T],
    autojunk: bool,
    is_junk: Option<Box<dyn Fn(&T) -> bool + 'a>>,
}

impl<'a, T: Eq + Hash> MatcherBuilder<'a, T> {
    /// Enables or disables the popular-element heuristic. On by default.
    pub fn autojunk(mut self, autojunk: bool) -> Self {
        self.autojunk = autojunk;
        self
    }

    /// Marks elements of `b` that should never start or end a match.
    pub fn junk<F>(mut self, is_junk: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.is_junk = Some(Box::new(is_junk));
        self
    }

    pub fn build(self) -> SequenceMatcher<'a, T> {
        let b = self.b;
        let mut b2j: AHashMap<&'a T, Positions> = AHashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }

        let junk: AHashSet<&'a T> = match &self.is_junk {
            Some(is_junk) => b2j.keys().copied().filter(|elt| is_junk(*elt)).collect(),
            None => AHashSet::new(),
        };
        b2j.retain(|elt, _| !junk.contains(elt));

        let mut popular: AHashSet<&'a T> = AHashSet::new();
        if self.autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            popular = b2j
                .iter()
                .filter(|(_, positions)| positions.len() > ntest)
                .map(|(elt, _)| *elt)
                .collect();
            b2j.retain(|elt, _| !popular.contains(elt));
        }

        debug!(
            a_len = self.a.len(),
            b_len = b.len(),
            indexed = b2j.len(),
            junk = junk.len(),
            popular = popular.len(),
            "built sequence matcher"
        );

        SequenceMatcher {
            a: self.a,
            b,
            b2j,
            junk,
            popular,
            matching_blocks: OnceCell::new(),
            opcodes: OnceCell::new(),
            full_b_count: OnceCell::new(),
        }
    }
}

/// Compares two sequences of hashable elements.
///
/// The matcher looks for the longest contiguous matching block that contains
/// no junk, then recursively does the same on the pieces to its left and
/// right. This does not yield minimal edit sequences but it tends to yield
/// matches that look right to people.
///
/// Every query is computed on first use and cached, so the matcher can be
/// shared between threads once built.
///
/// # Examples
///
/// ```
/// use seqdiff::matcher::{OpCode, SequenceMatcher, Tag};
///
/// let a: Vec<char> = "qabxcd".chars().collect();
/// let b: Vec<char> = "abycdf".chars().collect();
/// let matcher = SequenceMatcher::new(&a, &b);
/// assert_eq!(matcher.opcodes(), &[
///     OpCode::new(Tag::Delete, 0, 1, 0, 0),
///     OpCode::new(Tag::Equal, 1, 3, 0, 2),
///     OpCode::new(Tag::Replace, 3, 4, 2, 3),
///     OpCode::new(Tag::Equal, 4, 6, 3, 5),
///     OpCode::new(Tag::Insert, 6, 6, 5, 6),
/// ]);
/// assert!((matcher.ratio() - 2.0 * 4.0 / 12.0).abs() < 1e-9);
/// ```
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    b2j: AHashMap<&'a T, Positions>,
    junk: AHashSet<&'a T>,
    popular: AHashSet<&'a T>,
    matching_blocks: OnceCell<Vec<Match>>,
    opcodes: OnceCell<Vec<OpCode>>,
    full_b_count: OnceCell<AHashMap<&'a T, usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    /// Matcher with autojunk enabled and no junk predicate.
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self::builder(a, b).build()
    }

    pub fn builder(a: &'a [T], b: &'a [T]) -> MatcherBuilder<'a, T> {
        MatcherBuilder {
            a,
            b,
            autojunk: true,
            is_junk: None,
        }
    }

    pub fn a(&self) -> &'a [T] {
        self.a
    }

    pub fn b(&self) -> &'a [T] {
        self.b
    }

    /// Elements of `b` rejected by the junk predicate.
    pub fn junk(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.junk.iter().copied()
    }

    /// Elements of `b` dropped from the index by the autojunk heuristic.
    pub fn popular(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.popular.iter().copied()
    }

    pub fn is_junk(&self, elt: &T) -> bool {
        self.junk.contains(elt)
    }

    pub fn is_popular(&self, elt: &T) -> bool {
        self.popular.contains(elt)
    }

    /// Finds the longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among blocks of maximal length the one starting earliest in `a` wins,
    /// then the one starting earliest in `b`. Junk and popular elements never
    /// seed a match, but equal elements adjacent to the best match are
    /// absorbed afterwards, first non-junk ones and then junk ones.
    ///
    /// A zero-sized result at `(alo, blo)` means there is no match. Bounds
    /// past the end of a sequence are clamped.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (a, b) = (self.a, self.b);
        let ahi = ahi.min(a.len());
        let bhi = bhi.min(b.len());
        let alo = alo.min(ahi);
        let blo = blo.min(bhi);

        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);
        // j2len[j] is the length of the match ending at a[i - 1] and b[j]
        let mut j2len: AHashMap<usize, usize> = AHashMap::new();
        let mut newj2len: AHashMap<usize, usize> = AHashMap::new();
        for i in alo..ahi {
            newj2len.clear();
            if let Some(positions) = self.b2j.get(&a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    newj2len.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            std::mem::swap(&mut j2len, &mut newj2len);
        }

        while besti > alo
            && bestj > blo
            && !self.is_junk(&b[bestj - 1])
            && a[besti - 1] == b[bestj - 1]
        {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && !self.is_junk(&b[bestj + bestsize])
            && a[besti + bestsize] == b[bestj + bestsize]
        {
            bestsize += 1;
        }

        while besti > alo
            && bestj > blo
            && self.is_junk(&b[bestj - 1])
            && a[besti - 1] == b[bestj - 1]
        {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && self.is_junk(&b[bestj + bestsize])
            && a[besti + bestsize] == b[bestj + bestsize]
        {
            bestsize += 1;
        }

        Match::new(besti, bestj, bestsize)
    }

    /// Non-overlapping matching blocks in increasing order, terminated by the
    /// sentinel `(a.len(), b.len(), 0)`. Adjacent blocks are merged.
    pub fn matching_blocks(&self) -> &[Match] {
        self.matching_blocks
            .get_or_init(|| self.compute_matching_blocks())
    }

    fn compute_matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut queue = vec![(0, la, 0, lb)];
        let mut found = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.is_empty() {
                continue;
            }
            found.push(m);
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
        }
        found.sort_unstable_by_key(|m| (m.a, m.b));

        let mut blocks = Vec::with_capacity(found.len() + 1);
        let (mut i1, mut j1, mut k1) = (0, 0, 0);
        for m in found {
            if i1 + k1 == m.a && j1 + k1 == m.b {
                k1 += m.size;
            } else {
                if k1 > 0 {
                    blocks.push(Match::new(i1, j1, k1));
                }
                i1 = m.a;
                j1 = m.b;
                k1 = m.size;
            }
        }
        if k1 > 0 {
            blocks.push(Match::new(i1, j1, k1));
        }
        blocks.push(Match::new(la, lb, 0));

        debug!(blocks = blocks.len() - 1, "computed matching blocks");
        blocks
    }

    /// Opcodes describing how to turn `a` into `b`.
    ///
    /// The ranges cover both sequences without gaps and no two neighbouring
    /// opcodes share a tag.
    pub fn opcodes(&self) -> &[OpCode] {
        self.opcodes.get_or_init(|| {
            let blocks = self.matching_blocks();
            let mut codes = Vec::with_capacity(blocks.len() * 2);
            let (mut i, mut j) = (0, 0);
            for m in blocks {
                let tag = if i < m.a && j < m.b {
                    Some(Tag::Replace)
                } else if i < m.a {
                    Some(Tag::Delete)
                } else if j < m.b {
                    Some(Tag::Insert)
                } else {
                    None
                };
                if let Some(tag) = tag {
                    codes.push(OpCode::new(tag, i, m.a, j, m.b));
                }
                i = m.a + m.size;
                j = m.b + m.size;
                if m.size > 0 {
                    codes.push(OpCode::new(Tag::Equal, m.a, i, m.b, j));
                }
            }
            codes
        })
    }

    /// Opcodes grouped into hunks with up to `context` equal elements around
    /// each change. `None` means [`DEFAULT_CONTEXT`].
    pub fn grouped_opcodes(&self, context: Option<usize>) -> Vec<Hunk> {
        group::group_opcodes(self.opcodes(), context.unwrap_or(DEFAULT_CONTEXT))
    }

    /// Similarity in `[0, 1]`: twice the matched elements over the total.
    pub fn ratio(&self) -> f64 {
        let matches = self.matching_blocks().iter().map(|m| m.size).sum();
        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) that ignores element order.
    pub fn quick_ratio(&self) -> f64 {
        let full_b_count = self.full_b_count.get_or_init(|| {
            let mut counts = AHashMap::new();
            for elt in self.b {
                *counts.entry(elt).or_insert(0) += 1;
            }
            counts
        });

        // avail[x] is how many more times x can still be matched in b
        let mut avail: AHashMap<&T, usize> = AHashMap::new();
        let mut matches = 0;
        for elt in self.a {
            let n = avail
                .entry(elt)
                .or_insert_with(|| full_b_count.get(elt).copied().unwrap_or(0));
            if *n > 0 {
                *n -= 1;
                matches += 1;
            }
        }
        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// Upper bound on [`quick_ratio`](Self::quick_ratio) from lengths alone.
    pub fn real_quick_ratio(&self) -> f64 {
        let (la, lb) = (self.a.len(), self.b.len());
        calculate_ratio(la.min(lb), la + lb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn assert_close(actual: f64, expected: f64, places: i32) {
        assert!(
            (actual - expected).abs() <= 10f64.powi(-places),
            "{actual} != {expected}"
        );
    }

    proptest! {
        #[test]
        fn test_opcodes_cover_both_sequences(
            a in prop::collection::vec(0u8..6, 0..40),
            b in prop::collection::vec(0u8..6, 0..40),
        ) {
            let matcher = SequenceMatcher::new(&a, &b);
            let codes = matcher.opcodes();
            let (mut i, mut j) = (0, 0);
            for code in codes {
                prop_assert_eq!(code.i1, i);
                prop_assert_eq!(code.j1, j);
                match code.tag {
                    Tag::Equal => prop_assert_eq!(&a[code.a_range()], &b[code.b_range()]),
                    Tag::Delete => prop_assert!(code.i1 < code.i2 && code.j1 == code.j2),
                    Tag::Insert => prop_assert!(code.i1 == code.i2 && code.j1 < code.j2),
                    Tag::Replace => prop_assert!(code.i1 < code.i2 && code.j1 < code.j2),
                }
                i = code.i2;
                j = code.j2;
            }
            prop_assert_eq!(i, a.len());
            prop_assert_eq!(j, b.len());
            for pair in codes.windows(2) {
                prop_assert_ne!(pair[0].tag, pair[1].tag);
            }
        }

        #[test]
        fn test_matching_blocks_invariants(
            a in prop::collection::vec(0u8..4, 0..40),
            b in prop::collection::vec(0u8..4, 0..40),
        ) {
            let matcher = SequenceMatcher::new(&a, &b);
            let blocks = matcher.matching_blocks();
            prop_assert_eq!(blocks.last(), Some(&Match::new(a.len(), b.len(), 0)));
            for m in &blocks[..blocks.len() - 1] {
                prop_assert!(m.size > 0);
                prop_assert_eq!(&a[m.a..m.a + m.size], &b[m.b..m.b + m.size]);
            }
            for pair in blocks.windows(2) {
                let (x, y) = (pair[0], pair[1]);
                prop_assert!(x.a + x.size <= y.a && x.b + x.size <= y.b);
                prop_assert!(x.a + x.size < y.a || x.b + x.size < y.b || y.size == 0);
            }
        }

        #[test]
        fn test_ratio_bounds(
            a in prop::collection::vec(0u8..5, 0..30),
            b in prop::collection::vec(0u8..5, 0..30),
        ) {
            let matcher = SequenceMatcher::new(&a, &b);
            let (r, q, rq) = (matcher.ratio(), matcher.quick_ratio(), matcher.real_quick_ratio());
            prop_assert!((0.0..=1.0).contains(&r));
            prop_assert!(q >= r);
            prop_assert!(rq >= q);
        }

        #[test]
        fn test_ratio_reflexive(a in prop::collection::vec(any::<u8>(), 0..50)) {
            let matcher = SequenceMatcher::new(&a, &a);
            prop_assert_eq!(matcher.ratio(), 1.0);
        }
    }

    #[test]
    fn test_ratio() {
        let (a, b) = (chars("abcd"), chars("bcde"));
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(matcher.ratio(), 0.75);
        assert_eq!(matcher.quick_ratio(), 0.75);
        assert_eq!(matcher.real_quick_ratio(), 1.0);
    }

    #[test]
    fn test_empty_sequences() {
        let empty: Vec<char> = vec![];
        let matcher = SequenceMatcher::new(&empty, &empty);
        assert_eq!(matcher.ratio(), 1.0);
        assert_eq!(matcher.quick_ratio(), 1.0);
        assert_eq!(matcher.real_quick_ratio(), 1.0);
        assert_eq!(matcher.matching_blocks(), &[Match::new(0, 0, 0)]);
        assert!(matcher.opcodes().is_empty());
    }

    #[test]
    fn test_opcodes() {
        let (a, b) = (chars("qabxcd"), chars("abycdf"));
        let matcher = SequenceMatcher::new(&a, &b);
        let rendered: Vec<String> = matcher
            .opcodes()
            .iter()
            .map(|op| {
                format!(
                    "{} a[{}:{}] ({}) b[{}:{}] ({})",
                    op.tag.code(),
                    op.i1,
                    op.i2,
                    a[op.a_range()].iter().collect::<String>(),
                    op.j1,
                    op.j2,
                    b[op.b_range()].iter().collect::<String>(),
                )
            })
            .collect();
        assert_eq!(
            rendered,
            vec![
                "d a[0:1] (q) b[0:0] ()",
                "e a[1:3] (ab) b[0:2] (ab)",
                "r a[3:4] (x) b[2:3] (y)",
                "e a[4:6] (cd) b[3:5] (cd)",
                "i a[6:6] () b[5:6] (f)",
            ]
        );
    }

    #[test]
    fn test_matching_blocks_merge() {
        let (a, b) = (chars("abxcd"), chars("abcd"));
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(
            matcher.matching_blocks(),
            &[Match::new(0, 0, 2), Match::new(3, 2, 2), Match::new(5, 4, 0)]
        );
    }

    #[test]
    fn test_find_longest_match_prefers_earliest() {
        let (a, b) = (chars(" abcd"), chars("abcd abcd"));
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(matcher.find_longest_match(0, 5, 0, 9), Match::new(0, 4, 5));
    }

    #[test]
    fn test_find_longest_match_junk_does_not_seed() {
        let (a, b) = (chars(" abcd"), chars("abcd abcd"));
        let matcher = SequenceMatcher::builder(&a, &b)
            .junk(|c: &char| *c == ' ')
            .build();
        assert_eq!(matcher.find_longest_match(0, 5, 0, 9), Match::new(1, 0, 4));
    }

    #[test]
    fn test_find_longest_match_extends_over_junk() {
        let (a, b) = (chars("x a b"), chars("y a b"));
        let matcher = SequenceMatcher::builder(&a, &b)
            .junk(|c: &char| *c == ' ')
            .build();
        assert_eq!(matcher.find_longest_match(0, 5, 0, 5), Match::new(1, 1, 3));
    }

    #[test]
    fn test_find_longest_match_without_match() {
        let (a, b) = (chars("abc"), chars("xyz"));
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(matcher.find_longest_match(1, 3, 2, 3), Match::new(1, 2, 0));
    }

    #[test]
    fn test_ratio_with_junk() {
        let a = chars("private Thread currentThread;");
        let b = chars("private volatile Thread currentThread;");
        let matcher = SequenceMatcher::builder(&a, &b)
            .junk(|c: &char| *c == ' ')
            .build();
        assert_close(matcher.ratio(), 0.866, 3);
    }

    #[test]
    fn test_one_insert() {
        let a = chars(&"b".repeat(100));
        let b = chars(&format!("a{}", "b".repeat(100)));
        let matcher = SequenceMatcher::new(&a, &b);
        assert_close(matcher.ratio(), 0.995, 3);
        assert_eq!(
            matcher.opcodes(),
            &[
                OpCode::new(Tag::Insert, 0, 0, 0, 1),
                OpCode::new(Tag::Equal, 0, 100, 1, 101)
            ]
        );
        assert_eq!(matcher.popular().count(), 0);

        let b = chars(&format!("{}a{}", "b".repeat(50), "b".repeat(50)));
        let matcher = SequenceMatcher::new(&a, &b);
        assert_close(matcher.ratio(), 0.995, 3);
        assert_eq!(
            matcher.opcodes(),
            &[
                OpCode::new(Tag::Equal, 0, 50, 0, 50),
                OpCode::new(Tag::Insert, 50, 50, 50, 51),
                OpCode::new(Tag::Equal, 50, 100, 51, 101)
            ]
        );
        assert_eq!(matcher.popular().count(), 0);
    }

    #[test]
    fn test_one_insert_homogenous_sequence() {
        let a = chars(&"b".repeat(200));
        let b = chars(&format!("a{}", "b".repeat(200)));
        let matcher = SequenceMatcher::new(&a, &b);
        assert_close(matcher.ratio(), 0.0, 3);
        assert!(matcher.is_popular(&'b'));
        assert_eq!(matcher.popular().collect::<Vec<_>>(), vec![&'b']);

        let matcher = SequenceMatcher::builder(&a, &b).autojunk(false).build();
        assert_close(matcher.ratio(), 0.9975, 3);
        assert_eq!(matcher.popular().count(), 0);
    }

    #[test]
    fn test_one_delete() {
        let a = chars(&format!("{}c{}", "a".repeat(40), "b".repeat(40)));
        let b = chars(&format!("{}{}", "a".repeat(40), "b".repeat(40)));
        let matcher = SequenceMatcher::new(&a, &b);
        assert_close(matcher.ratio(), 0.994, 3);
        assert_eq!(
            matcher.opcodes(),
            &[
                OpCode::new(Tag::Equal, 0, 40, 0, 40),
                OpCode::new(Tag::Delete, 40, 41, 40, 40),
                OpCode::new(Tag::Equal, 41, 81, 40, 80)
            ]
        );
    }

    #[test]
    fn test_junk_sets() {
        let a = chars(&format!("{}{}", "a".repeat(40), "b".repeat(40)));
        let b = chars(&format!("{}{}", "a".repeat(44), "b".repeat(40)));
        let matcher = SequenceMatcher::builder(&a, &b)
            .junk(|c: &char| *c == ' ')
            .build();
        assert_eq!(matcher.junk().count(), 0);

        let b = chars(&format!("{}{}{}", "a".repeat(44), "b".repeat(40), " ".repeat(20)));
        let matcher = SequenceMatcher::builder(&a, &b)
            .autojunk(false)
            .junk(|c: &char| *c == ' ')
            .build();
        assert_eq!(matcher.junk().collect::<Vec<_>>(), vec![&' ']);

        let matcher = SequenceMatcher::builder(&a, &b)
            .autojunk(false)
            .junk(|c: &char| *c == ' ' || *c == 'b')
            .build();
        let mut junk: Vec<char> = matcher.junk().copied().collect();
        junk.sort_unstable();
        assert_eq!(junk, vec![' ', 'b']);
        assert!(!matcher.is_popular(&'b'));
    }

    #[test]
    fn test_popular_is_tracked_apart_from_junk() {
        let a = chars("abc");
        let b: Vec<char> = "x".repeat(150).chars().chain("y".repeat(60).chars()).collect();
        let matcher = SequenceMatcher::builder(&a, &b)
            .junk(|c: &char| *c == 'y')
            .build();
        assert!(matcher.is_popular(&'x'));
        assert!(!matcher.is_junk(&'x'));
        assert!(matcher.is_junk(&'y'));
        assert!(!matcher.is_popular(&'y'));
    }

    #[test]
    fn test_cached_results_are_stable() {
        let (a, b) = (chars("abxcd"), chars("abcd"));
        let matcher = SequenceMatcher::new(&a, &b);
        let first = matcher.matching_blocks().as_ptr();
        assert_eq!(first, matcher.matching_blocks().as_ptr());
        assert_eq!(matcher.opcodes(), matcher.opcodes());
    }

    #[test]
    fn test_shared_between_threads() {
        let a = chars(&"abcdefgh".repeat(20));
        let b = chars(&"abcdxfgh".repeat(20));
        let matcher = SequenceMatcher::new(&a, &b);
        let ratios: Vec<f64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| matcher.ratio())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(ratios.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_match_absorbs_adjacent_popular_element() {
        let a = chars("xab");
        let b: Vec<char> = format!("{}xab{}", "x".repeat(149), "y".repeat(48))
            .chars()
            .collect();
        let matcher = SequenceMatcher::new(&a, &b);
        assert!(matcher.is_popular(&'x'));
        assert_eq!(matcher.find_longest_match(0, 3, 0, 200), Match::new(0, 149, 3));
    }
}
