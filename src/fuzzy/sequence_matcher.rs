//! Ratcliff/Obershelp sequence matching over characters.
//!
//! The matcher repeatedly finds the longest common block of two sequences and
//! recurses on the pieces to its left and right. With `M` the total number of
//! matched characters, the similarity ratio is `2 * M / (len(a) + len(b))`.
//!
//! The second sequence is indexed once (character -> positions) so it can be
//! compared against many first sequences cheaply, which is how the resolver
//! scans a catalog for one query.
//!
//! # Examples
//!
//! ```
//! use recomenda::fuzzy::SequenceMatcher;
//!
//! let matcher = SequenceMatcher::new("Avatar");
//! assert_eq!(matcher.ratio("Avatar"), 1.0);
//! assert!((matcher.ratio("Avatr") - 10.0 / 11.0).abs() < 1e-12);
//! ```

use ahash::AHashMap;

/// A reusable matcher indexed on its second sequence.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    b: Vec<char>,
    /// Positions of every character of `b`, ascending.
    b2j: AHashMap<char, Vec<usize>>,
    /// Character counts of `b`, for the quick upper bound.
    b_counts: AHashMap<char, usize>,
}

/// A common block: `a[a_start..a_start + size] == b[b_start..b_start + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

impl SequenceMatcher {
    /// Index `b` as the fixed side of future comparisons.
    pub fn new(b: &str) -> Self {
        let b: Vec<char> = b.chars().collect();
        let mut b2j: AHashMap<char, Vec<usize>> = AHashMap::new();
        let mut b_counts: AHashMap<char, usize> = AHashMap::new();

        for (j, ch) in b.iter().enumerate() {
            b2j.entry(*ch).or_default().push(j);
            *b_counts.entry(*ch).or_insert(0) += 1;
        }

        SequenceMatcher { b, b2j, b_counts }
    }

    /// Length of the indexed sequence in characters.
    pub fn len(&self) -> usize {
        self.b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    /// Similarity ratio of `a` against the indexed sequence, in [0, 1].
    pub fn ratio(&self, a: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let matched: usize = self
            .matching_blocks(&a)
            .iter()
            .map(|block| block.size)
            .sum();
        calculate_ratio(matched, a.len() + self.b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) from character multisets.
    pub fn quick_ratio(&self, a: &str) -> f64 {
        let mut available = self.b_counts.clone();
        let mut matched = 0;
        let mut a_len = 0;

        for ch in a.chars() {
            a_len += 1;
            if let Some(count) = available.get_mut(&ch)
                && *count > 0
            {
                *count -= 1;
                matched += 1;
            }
        }

        calculate_ratio(matched, a_len + self.b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) from lengths alone.
    pub fn real_quick_ratio(&self, a: &str) -> f64 {
        let a_len = a.chars().count();
        let b_len = self.b.len();
        calculate_ratio(a_len.min(b_len), a_len + b_len)
    }

    /// All common blocks of `a` and the indexed sequence, ordered by position.
    pub fn matching_blocks(&self, a: &[char]) -> Vec<MatchingBlock> {
        let mut queue = vec![(0, a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((a_lo, a_hi, b_lo, b_hi)) = queue.pop() {
            let block = self.find_longest_match(a, a_lo, a_hi, b_lo, b_hi);
            if block.size == 0 {
                continue;
            }

            if a_lo < block.a_start && b_lo < block.b_start {
                queue.push((a_lo, block.a_start, b_lo, block.b_start));
            }
            let a_end = block.a_start + block.size;
            let b_end = block.b_start + block.size;
            if a_end < a_hi && b_end < b_hi {
                queue.push((a_end, a_hi, b_end, b_hi));
            }
            blocks.push(block);
        }

        blocks.sort_by_key(|block| (block.a_start, block.b_start));
        blocks
    }

    /// Longest common block of `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
    ///
    /// Among equally long blocks the one starting earliest in `a` wins, then
    /// the one starting earliest in `b`.
    fn find_longest_match(
        &self,
        a: &[char],
        a_lo: usize,
        a_hi: usize,
        b_lo: usize,
        b_hi: usize,
    ) -> MatchingBlock {
        let mut best = MatchingBlock {
            a_start: a_lo,
            b_start: b_lo,
            size: 0,
        };
        // Length of the match ending at (i - 1, j), keyed by j.
        let mut j2len: AHashMap<usize, usize> = AHashMap::new();

        for (i, ch) in a.iter().enumerate().take(a_hi).skip(a_lo) {
            let mut next_j2len: AHashMap<usize, usize> = AHashMap::new();
            if let Some(positions) = self.b2j.get(ch) {
                for &j in positions {
                    if j < b_lo {
                        continue;
                    }
                    if j >= b_hi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best.size {
                        best = MatchingBlock {
                            a_start: i + 1 - k,
                            b_start: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            j2len = next_j2len;
        }

        best
    }
}

fn calculate_ratio(matched: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        2.0 * matched as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_identical_and_disjoint() {
        let matcher = SequenceMatcher::new("Heat");
        assert_eq!(matcher.ratio("Heat"), 1.0);
        assert_eq!(matcher.ratio("xyz"), 0.0);
    }

    #[test]
    fn test_classic_ratio() {
        // "abcd" vs "bcde": one block "bcd" of size 3.
        let matcher = SequenceMatcher::new("bcde");
        assert_eq!(matcher.ratio("abcd"), 0.75);
    }

    #[test]
    fn test_case_sensitive() {
        let matcher = SequenceMatcher::new("avatar");
        assert!(matcher.ratio("AVATAR") < 0.2);
        assert_eq!(matcher.ratio("avatar"), 1.0);
    }

    #[test]
    fn test_matching_blocks() {
        let matcher = SequenceMatcher::new("abxcd");
        let blocks = matcher.matching_blocks(&chars("abcd"));

        assert_eq!(
            blocks,
            vec![
                MatchingBlock { a_start: 0, b_start: 0, size: 2 },
                MatchingBlock { a_start: 2, b_start: 3, size: 2 },
            ]
        );
    }

    #[test]
    fn test_longest_match_prefers_earliest() {
        // "ab" occurs twice in b; the earliest occurrence is reported.
        let matcher = SequenceMatcher::new("abab");
        let blocks = matcher.matching_blocks(&chars("ab"));
        assert_eq!(blocks, vec![MatchingBlock { a_start: 0, b_start: 0, size: 2 }]);
    }

    #[test]
    fn test_bounds_dominate_ratio() {
        let matcher = SequenceMatcher::new("Toy Story 2");
        for candidate in ["Toy Story", "Story Toy", "Tory Stoy 3", "", "2"] {
            let ratio = matcher.ratio(candidate);
            assert!(matcher.quick_ratio(candidate) >= ratio);
            assert!(matcher.real_quick_ratio(candidate) >= matcher.quick_ratio(candidate));
        }
    }

    #[test]
    fn test_empty_sequences() {
        let matcher = SequenceMatcher::new("");
        assert!(matcher.is_empty());
        assert_eq!(matcher.ratio(""), 1.0);
        assert_eq!(matcher.ratio("Up"), 0.0);
        assert_eq!(SequenceMatcher::new("Up").len(), 2);
    }

    #[test]
    fn test_unicode_counts_characters() {
        let matcher = SequenceMatcher::new("Amélie");
        assert_eq!(matcher.ratio("Amelie"), 2.0 * 5.0 / 12.0);
    }
}
