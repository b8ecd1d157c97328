//! Character-level Levenshtein distance.

/// Minimum number of single-character insertions, deletions, or substitutions
/// to transform `a` into `b`.
///
/// Single-row dynamic programming with the shorter string as the inner
/// dimension: O(min(|a|,|b|)) memory, and symmetry holds regardless of
/// argument order. Time is O(|a|·|b|), which is fine for resume-length text;
/// very large documents pay the quadratic cost in full, nothing is truncated.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if shorter.is_empty() {
        return longer.len();
    }

    let mut prev: Vec<usize> = (0..=shorter.len()).collect();
    let mut curr = vec![0usize; shorter.len() + 1];

    for (i, ca) in longer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in shorter.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[shorter.len()]
}
