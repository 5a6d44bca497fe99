//! Edit-distance-one adjacency between words.
//!
//! Only the distinction between distance 1 and anything else matters here, so
//! each test is a single early-exit scan instead of a full edit-distance
//! matrix.

use ahash::AHashSet;
use rayon::prelude::*;

use crate::dictionary::{WordIndex, word_len};

/// Check whether two words are exactly one insertion, deletion or
/// substitution apart.
///
/// A word is never adjacent to itself.
pub fn is_adjacent(a: &str, b: &str) -> bool {
    is_adjacent_with_lengths(a, word_len(a), b, word_len(b))
}

fn is_adjacent_with_lengths(a: &str, len_a: usize, b: &str, len_b: usize) -> bool {
    match len_a.abs_diff(len_b) {
        0 => is_single_substitution(a, b),
        1 if len_a < len_b => is_single_insertion(a, b),
        1 => is_single_insertion(b, a),
        _ => false,
    }
}

/// Equal-length words differing in exactly one position.
fn is_single_substitution(a: &str, b: &str) -> bool {
    let mut mismatches = 0;
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            mismatches += 1;
            if mismatches == 2 {
                return false;
            }
        }
    }
    mismatches == 1
}

/// `longer` is `shorter` with one character inserted.
///
/// Callers guarantee `longer` has exactly one more char than `shorter`.
fn is_single_insertion(shorter: &str, longer: &str) -> bool {
    let mut short_chars = shorter.chars();
    let mut long_chars = longer.chars();
    let mut skipped = false;

    let mut pending = short_chars.next();
    while let Some(expected) = pending {
        match long_chars.next() {
            Some(actual) if actual == expected => pending = short_chars.next(),
            Some(_) if !skipped => skipped = true,
            _ => return false,
        }
    }

    // If nothing was skipped, the one leftover char of `longer` is the insertion.
    true
}

/// Collect every pool word adjacent to `word` that is not in `exclude`.
fn collect_adjacent(
    word: &str,
    pool: &WordIndex,
    exclude: &AHashSet<String>,
    found: &mut AHashSet<String>,
) {
    let len = word_len(word);
    let probe_lengths = [len.checked_sub(1), Some(len), Some(len + 1)];

    for probe_len in probe_lengths.into_iter().flatten() {
        let Some(bucket) = pool.bucket(probe_len) else {
            continue;
        };
        for other in bucket {
            if exclude.contains(other) || found.contains(other) {
                continue;
            }
            if is_adjacent_with_lengths(word, len, other, probe_len) {
                found.insert(other.clone());
            }
        }
    }
}

/// Find all pool words adjacent to any candidate, skipping excluded words.
///
/// Neither `pool` nor `exclude` is modified. Matches reached from several
/// candidates appear once.
pub fn find_adjacent<I, S>(
    candidates: I,
    pool: &WordIndex,
    exclude: &AHashSet<String>,
) -> AHashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut found = AHashSet::new();
    for candidate in candidates {
        collect_adjacent(candidate.as_ref(), pool, exclude, &mut found);
    }
    found
}

/// Parallel version of [`find_adjacent`].
///
/// Candidates are scanned on the current rayon pool and per-candidate results
/// are merged afterwards. The result equals the sequential one.
pub fn par_find_adjacent<S>(
    candidates: &[S],
    pool: &WordIndex,
    exclude: &AHashSet<String>,
) -> AHashSet<String>
where
    S: AsRef<str> + Sync,
{
    candidates
        .par_iter()
        .map(|candidate| {
            let mut found = AHashSet::new();
            collect_adjacent(candidate.as_ref(), pool, exclude, &mut found);
            found
        })
        .reduce(AHashSet::new, |mut left, mut right| {
            if left.len() < right.len() {
                std::mem::swap(&mut left, &mut right);
            }
            left.extend(right);
            left
        })
}
