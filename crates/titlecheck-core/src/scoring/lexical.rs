/// Character-level similarity of two titles on a `0..=100` scale.
///
/// Normalized InDel ratio of the lower-cased strings:
/// `100 * 2 * lcs / (len_a + len_b)`, where `lcs` is the length of the
/// longest common subsequence. Fractions round up, so
/// `100 - ratio >= threshold` decides the same as the unrounded score for any
/// integer threshold. Two empty strings are identical (100).
#[must_use]
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }

    let scaled = 200 * longest_common_subsequence(&a, &b);
    let rounded_up = scaled.div_ceil(total);
    u8::try_from(rounded_up.min(100)).unwrap_or(100)
}

/// Length of the longest common subsequence, two-row dynamic programming.
fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
