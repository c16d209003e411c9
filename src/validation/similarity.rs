//! Character-multiset similarity used by the attribute check.

use std::collections::HashMap;

/// Upper-bound similarity estimate between two strings.
///
/// Computes `2M / T` where `M` is the size of the character-multiset
/// intersection of `a` and `b` and `T` the combined length in characters.
/// This is the cheap frequency-intersection bound, not a full alignment:
/// it never under-reports relative to an optimal-alignment ratio.
/// Symmetric, deterministic, and always in `[0, 1]`; two empty strings
/// score `1.0`. Callers fold case before calling.
pub fn quick_ratio(a: &str, b: &str) -> f64 {
    let mut b_counts: HashMap<char, usize> = HashMap::new();
    let mut b_len = 0usize;
    for ch in b.chars() {
        *b_counts.entry(ch).or_insert(0) += 1;
        b_len += 1;
    }

    let mut a_len = 0usize;
    let mut matches = 0usize;
    for ch in a.chars() {
        a_len += 1;
        if let Some(remaining) = b_counts.get_mut(&ch) {
            if *remaining > 0 {
                *remaining -= 1;
                matches += 1;
            }
        }
    }

    ratio_from(matches, a_len + b_len)
}

fn ratio_from(matches: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        2.0 * matches as f64 / total as f64
    }
}
