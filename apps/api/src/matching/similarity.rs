//! Fuzzy Similarity — character-sequence ratio used as a soft-match booster.
//!
//! The ratio is `2·M / T`, where `T` is the combined length of both strings and
//! `M` is the number of characters covered by the matching blocks found by
//! recursively taking the longest common run (Ratcliff/Obershelp). Identical
//! strings score 1.0; strings with nothing in common score 0.0.

use std::collections::HashMap;

/// Pairs scoring strictly above this ratio are considered similar.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Sequences at least this long have their "popular" characters excluded from
/// longest-match seeding.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Returns true when `a` and `b` are close enough to earn a fuzzy bonus.
///
/// The pair is put in a canonical order first so that
/// `is_similar(a, b) == is_similar(b, a)` holds even where longest-match tie
/// breaking would otherwise depend on argument order.
pub fn is_similar(a: &str, b: &str) -> bool {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    sequence_ratio(first, second) > SIMILARITY_THRESHOLD
}

/// Similarity ratio in `[0.0, 1.0]` between two strings, computed over chars.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = SequenceMatcher::new(&a, &b).matched_len();
    2.0 * matched as f64 / total as f64
}

/// Longest-matching-block finder over two char slices.
struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each char in `b`, ascending. Popular chars are absent.
    b_index: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b_index: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b_index.entry(c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let popular_above = b.len() / 100 + 1;
            b_index.retain(|_, positions| positions.len() <= popular_above);
        }

        Self { a, b, b_index }
    }

    /// Total size of all matching blocks.
    fn matched_len(&self) -> usize {
        let mut matched = 0;
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
            let (i, j, size) = self.longest_match(a_lo, a_hi, b_lo, b_hi);
            if size == 0 {
                continue;
            }
            matched += size;
            if a_lo < i && b_lo < j {
                pending.push((a_lo, i, b_lo, j));
            }
            if i + size < a_hi && j + size < b_hi {
                pending.push((i + size, a_hi, j + size, b_hi));
            }
        }

        matched
    }

    /// Longest common run within `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
    ///
    /// Among equally long runs the one starting earliest in `a` wins, then the
    /// one starting earliest in `b`.
    fn longest_match(
        &self,
        a_lo: usize,
        a_hi: usize,
        b_lo: usize,
        b_hi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (a_lo, b_lo, 0);

        // run_len[j + 1] = length of the match ending at a[i - 1] and b[j];
        // only slots written by the previous row are non-zero.
        let mut run_len = vec![0usize; b_hi + 1];
        let mut next_run_len = vec![0usize; b_hi + 1];
        let mut touched: Vec<usize> = Vec::new();
        let mut next_touched: Vec<usize> = Vec::new();
        for i in a_lo..a_hi {
            if let Some(positions) = self.b_index.get(&self.a[i]) {
                for &j in positions {
                    if j < b_lo {
                        continue;
                    }
                    if j >= b_hi {
                        break;
                    }
                    let k = run_len[j] + 1;
                    next_run_len[j + 1] = k;
                    next_touched.push(j + 1);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            for slot in touched.drain(..) {
                run_len[slot] = 0;
            }
            std::mem::swap(&mut run_len, &mut next_run_len);
            std::mem::swap(&mut touched, &mut next_touched);
        }

        // Popular chars never seed a match but may still extend one.
        while best_i > a_lo && best_j > b_lo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < a_hi
            && best_j + best_size < b_hi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }
}
