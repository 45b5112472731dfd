//! Levenshtein edit distance for the spelling corrector.

use std::cmp::min;

/// Exact Levenshtein distance between two words: the fewest
/// single-character insertions, deletions, and substitutions that turn one
/// into the other. Operates on `char`s, so a multi-byte character counts as
/// one edit.
pub fn levenshtein_distance(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();

    if source.is_empty() {
        return target.len();
    }
    if target.is_empty() {
        return source.len();
    }

    // Full dynamic-programming table; row 0 and column 0 hold the cost of
    // building each prefix from the empty string.
    let mut table = vec![vec![0usize; target.len() + 1]; source.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, slot) in table[0].iter_mut().enumerate() {
        *slot = j;
    }

    for i in 1..=source.len() {
        for j in 1..=target.len() {
            let substitution_cost = usize::from(source[i - 1] != target[j - 1]);
            table[i][j] = min(
                min(table[i - 1][j] + 1, table[i][j - 1] + 1),
                table[i - 1][j - 1] + substitution_cost,
            );
        }
    }

    table[source.len()][target.len()]
}

/// Levenshtein distance capped at `threshold`.
///
/// Returns `None` as soon as the distance provably exceeds the threshold,
/// which is the common case when scanning a vocabulary against a small
/// edit budget. Only two table rows are kept.
pub fn levenshtein_distance_threshold(
    source: &str,
    target: &str,
    threshold: usize,
) -> Option<usize> {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();

    // A length gap alone already costs that many insertions or deletions.
    if source.len().abs_diff(target.len()) > threshold {
        return None;
    }

    if source.is_empty() {
        return (target.len() <= threshold).then_some(target.len());
    }
    if target.is_empty() {
        return (source.len() <= threshold).then_some(source.len());
    }

    let mut previous: Vec<usize> = (0..=target.len()).collect();
    let mut current = vec![0usize; target.len() + 1];

    for i in 1..=source.len() {
        current[0] = i;
        let mut row_minimum = i;

        for j in 1..=target.len() {
            let substitution_cost = usize::from(source[i - 1] != target[j - 1]);
            current[j] = min(
                min(previous[j] + 1, current[j - 1] + 1),
                previous[j - 1] + substitution_cost,
            );
            row_minimum = min(row_minimum, current[j]);
        }

        // Every cell in later rows is at least the row minimum, so once it
        // passes the threshold no path back under it exists.
        if row_minimum > threshold {
            return None;
        }

        std::mem::swap(&mut previous, &mut current);
    }

    let distance = previous[target.len()];
    (distance <= threshold).then_some(distance)
}
