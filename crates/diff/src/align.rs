use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sequences shorter than this never have popular elements discarded
const AUTOJUNK_MIN_LEN: usize = 200;

/// The label of an alignment step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffTag {
    /// Identical elements on both sides
    #[display(fmt = "equal")]
    Equal,

    /// Elements only present in sequence B
    #[display(fmt = "insert")]
    Insert,

    /// Elements only present in sequence A
    #[display(fmt = "delete")]
    Delete,

    /// Elements of A replaced by different elements of B
    #[display(fmt = "replace")]
    Replace,
}

/// One step of an alignment, with half-open ranges into both sequences.
///
/// `Insert` carries an empty `a` range at the insertion point and `Delete` an
/// empty `b` range, so every operation still locates itself on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Equal { a: Range<usize>, b: Range<usize> },
    Insert { a: Range<usize>, b: Range<usize> },
    Delete { a: Range<usize>, b: Range<usize> },
    Replace { a: Range<usize>, b: Range<usize> },
}

impl EditOp {
    /// Build an operation from its tag and ranges
    pub fn new(tag: DiffTag, a: Range<usize>, b: Range<usize>) -> Self {
        match tag {
            DiffTag::Equal => EditOp::Equal { a, b },
            DiffTag::Insert => EditOp::Insert { a, b },
            DiffTag::Delete => EditOp::Delete { a, b },
            DiffTag::Replace => EditOp::Replace { a, b },
        }
    }

    pub fn tag(&self) -> DiffTag {
        match self {
            EditOp::Equal { .. } => DiffTag::Equal,
            EditOp::Insert { .. } => DiffTag::Insert,
            EditOp::Delete { .. } => DiffTag::Delete,
            EditOp::Replace { .. } => DiffTag::Replace,
        }
    }

    /// Range covered in sequence A
    pub fn a_range(&self) -> Range<usize> {
        match self {
            EditOp::Equal { a, .. }
            | EditOp::Insert { a, .. }
            | EditOp::Delete { a, .. }
            | EditOp::Replace { a, .. } => a.clone(),
        }
    }

    /// Range covered in sequence B
    pub fn b_range(&self) -> Range<usize> {
        match self {
            EditOp::Equal { b, .. }
            | EditOp::Insert { b, .. }
            | EditOp::Delete { b, .. }
            | EditOp::Replace { b, .. } => b.clone(),
        }
    }
}

/// A run of `len` identical elements starting at `a` in A and `b` in B
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub len: usize,
}

/// Longest-matching-block aligner over two slices.
///
/// Finds the longest common contiguous block, then does the same on the
/// regions before and after it until nothing matches. Pending regions live on
/// an explicit stack so the depth of the search never touches the call stack.
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    /// Positions of each element of B, ascending
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self::with_autojunk(a, b, false)
    }

    /// Create a matcher that, when `autojunk` is set and B has at least 200
    /// elements, refuses to anchor matches on elements making up more than 1%
    /// of B. Matches found elsewhere are still extended across them.
    pub fn with_autojunk(a: &'a [T], b: &'a [T], autojunk: bool) -> Self {
        let mut b2j: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, element) in b.iter().enumerate() {
            b2j.entry(element).or_default().push(j);
        }

        if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let threshold = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= threshold);
        }

        Self { a, b, b2j }
    }

    /// Longest block of equal elements within `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among blocks of the same length the one starting earliest in A wins,
    /// then the one starting earliest in B. Returns a zero-length block at
    /// `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let (mut best_i, mut best_j, mut best_len) = (alo, blo, 0);

        // j2len[j] = length of the match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        let mut next_j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            next_j2len.clear();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
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
                    next_j2len.insert(j, k);
                    if k > best_len {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_len = k;
                    }
                }
            }
            std::mem::swap(&mut j2len, &mut next_j2len);
        }

        // Only grows when elements were dropped from b2j
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_len += 1;
        }
        while best_i + best_len < ahi
            && best_j + best_len < bhi
            && self.a[best_i + best_len] == self.b[best_j + best_len]
        {
            best_len += 1;
        }

        MatchingBlock {
            a: best_i,
            b: best_j,
            len: best_len,
        }
    }

    /// All matching blocks in order, with adjacent blocks merged.
    ///
    /// The list always ends with a zero-length sentinel at `(len(A), len(B))`.
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let (len_a, len_b) = (self.a.len(), self.b.len());

        let mut pending = vec![(0, len_a, 0, len_b)];
        let mut found = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.len == 0 {
                continue;
            }
            if alo < block.a && blo < block.b {
                pending.push((alo, block.a, blo, block.b));
            }
            if block.a + block.len < ahi && block.b + block.len < bhi {
                pending.push((block.a + block.len, ahi, block.b + block.len, bhi));
            }
            found.push(block);
        }

        found.sort_unstable_by_key(|block| (block.a, block.b));

        let mut blocks: Vec<MatchingBlock> = Vec::with_capacity(found.len() + 1);
        for block in found {
            if let Some(last) = blocks.last_mut() {
                if last.a + last.len == block.a && last.b + last.len == block.b {
                    last.len += block.len;
                    continue;
                }
            }
            blocks.push(block);
        }

        blocks.push(MatchingBlock {
            a: len_a,
            b: len_b,
            len: 0,
        });
        blocks
    }

    /// Edit operations that partition both sequences, equal runs included
    pub fn edit_ops(&self) -> Vec<EditOp> {
        let mut ops = Vec::new();
        let (mut i, mut j) = (0, 0);

        for block in self.matching_blocks() {
            let gap_a = i..block.a;
            let gap_b = j..block.b;
            match (gap_a.is_empty(), gap_b.is_empty()) {
                (false, false) => ops.push(EditOp::Replace { a: gap_a, b: gap_b }),
                (false, true) => ops.push(EditOp::Delete { a: gap_a, b: gap_b }),
                (true, false) => ops.push(EditOp::Insert { a: gap_a, b: gap_b }),
                (true, true) => {}
            }

            if block.len > 0 {
                ops.push(EditOp::Equal {
                    a: block.a..block.a + block.len,
                    b: block.b..block.b + block.len,
                });
            }

            i = block.a + block.len;
            j = block.b + block.len;
        }

        ops
    }
}

/// Align two sequences with the longest-matching-block aligner
pub fn align<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<EditOp> {
    SequenceMatcher::new(a, b).edit_ops()
}

/// Align two sequences through one of `similar`'s algorithms.
///
/// The result has the same shape as [`align`] but the anchoring of matches
/// follows the chosen algorithm.
pub fn align_similar<T: Eq + Hash + Ord>(algorithm: similar::Algorithm, a: &[T], b: &[T]) -> Vec<EditOp> {
    similar::capture_diff_slices(algorithm, a, b)
        .iter()
        .map(|op| {
            let (tag, a, b) = op.as_tag_tuple();
            let tag = match tag {
                similar::DiffTag::Equal => DiffTag::Equal,
                similar::DiffTag::Insert => DiffTag::Insert,
                similar::DiffTag::Delete => DiffTag::Delete,
                similar::DiffTag::Replace => DiffTag::Replace,
            };
            EditOp::new(tag, a, b)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_longest_match_prefers_earliest_in_a_then_b() {
        let a = chars("xabyab");
        let b = chars("abab");
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(
            matcher.find_longest_match(0, a.len(), 0, b.len()),
            MatchingBlock { a: 1, b: 0, len: 2 }
        );
    }

    #[test]
    fn test_no_match_returns_empty_block_at_origin() {
        let a = chars("abc");
        let b = chars("xyz");
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(
            matcher.find_longest_match(1, 3, 2, 3),
            MatchingBlock { a: 1, b: 2, len: 0 }
        );
    }

    #[test]
    fn test_matching_blocks_are_merged_and_terminated() {
        let a = chars("abxcd");
        let b = chars("abcd");
        let blocks = SequenceMatcher::new(&a, &b).matching_blocks();
        assert_eq!(
            blocks,
            vec![
                MatchingBlock { a: 0, b: 0, len: 2 },
                MatchingBlock { a: 3, b: 2, len: 2 },
                MatchingBlock { a: 5, b: 4, len: 0 },
            ]
        );
    }

    #[test]
    fn test_edit_ops_classify_gaps() {
        let a = chars("qabxcd");
        let b = chars("abycdf");
        assert_eq!(
            align(&a, &b),
            vec![
                EditOp::Delete { a: 0..1, b: 0..0 },
                EditOp::Equal { a: 1..3, b: 0..2 },
                EditOp::Replace { a: 3..4, b: 2..3 },
                EditOp::Equal { a: 4..6, b: 3..5 },
                EditOp::Insert { a: 6..6, b: 5..6 },
            ]
        );
    }

    #[test]
    fn test_empty_sequences() {
        let empty: Vec<char> = Vec::new();
        let some = chars("ab");
        assert!(align(&empty, &empty).is_empty());
        assert_eq!(align(&empty, &some), vec![EditOp::Insert { a: 0..0, b: 0..2 }]);
        assert_eq!(align(&some, &empty), vec![EditOp::Delete { a: 0..2, b: 0..0 }]);
    }

    #[test]
    fn test_autojunk_skips_popular_anchor() {
        let a = vec!['x', 'x', 'x', 'u'];
        let mut b = vec!['u'];
        b.extend(std::iter::repeat('x').take(250));

        let plain = SequenceMatcher::new(&a, &b);
        assert_eq!(
            plain.find_longest_match(0, a.len(), 0, b.len()),
            MatchingBlock { a: 0, b: 1, len: 3 }
        );

        let junked = SequenceMatcher::with_autojunk(&a, &b, true);
        assert_eq!(
            junked.find_longest_match(0, a.len(), 0, b.len()),
            MatchingBlock { a: 3, b: 0, len: 1 }
        );
    }

    #[test]
    fn test_autojunk_keeps_identical_sequences_equal() {
        let a = vec!['a'; 300];
        let ops = SequenceMatcher::with_autojunk(&a, &a, true).edit_ops();
        assert_eq!(ops, vec![EditOp::Equal { a: 0..300, b: 0..300 }]);
    }

    #[test]
    fn test_autojunk_extends_across_popular_elements() {
        // 'x' is popular in b; the unique 'u' anchors and the match grows over the x's
        let mut a = vec!['x'; 5];
        a.push('u');
        let mut b = vec!['x'; 250];
        b.push('u');
        let matcher = SequenceMatcher::with_autojunk(&a, &b, true);
        assert_eq!(
            matcher.find_longest_match(0, a.len(), 0, b.len()),
            MatchingBlock { a: 0, b: 245, len: 6 }
        );
    }

    #[test]
    fn test_similar_myers_shape() {
        let a = vec!["A", "B", "C"];
        let b = vec!["A", "X", "C"];
        assert_eq!(
            align_similar(similar::Algorithm::Myers, &a, &b),
            vec![
                EditOp::Equal { a: 0..1, b: 0..1 },
                EditOp::Replace { a: 1..2, b: 1..2 },
                EditOp::Equal { a: 2..3, b: 2..3 },
            ]
        );
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(DiffTag::Replace.to_string(), "replace");
        assert_eq!(EditOp::new(DiffTag::Insert, 2..2, 3..5).tag(), DiffTag::Insert);
    }
}
