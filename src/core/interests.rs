use std::collections::HashSet;

/// Separator used in the stored interests field
pub const INTEREST_SEPARATOR: char = ',';

/// Derive the interest set from a stored interests field
///
/// Segments are trimmed, lowercased and deduplicated. Empty segments are
/// dropped, so a blank or all-separator field yields the empty set rather
/// than `{""}` - an empty set zeroes out the interest factor instead of
/// polluting the Jaccard denominator.
pub fn interest_set(raw: &str) -> HashSet<String> {
    raw.split(INTEREST_SEPARATOR)
        .map(|segment| segment.trim().to_lowercase())
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Jaccard index of two sets: |a ∩ b| / |a ∪ b|
///
/// Returns 0.0 when either set is empty.
#[inline]
pub fn jaccard_index(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.union(b).count();

    intersection as f64 / union as f64
}

/// Interests present in both sets, sorted for deterministic output
pub fn shared_interests(a: &HashSet<String>, b: &HashSet<String>) -> Vec<String> {
    let mut shared: Vec<String> = a.intersection(b).cloned().collect();
    shared.sort();
    shared
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_set_splits_and_lowercases() {
        let set = interest_set("Hiking,music,HIKING");
        assert_eq!(set.len(), 2);
        assert!(set.contains("hiking"));
        assert!(set.contains("music"));
    }

    #[test]
    fn test_interest_set_trims_whitespace() {
        let set = interest_set("hiking, music , travel");
        assert_eq!(set.len(), 3);
        assert!(set.contains("music"));
        assert!(set.contains("travel"));
    }

    #[test]
    fn test_blank_field_yields_empty_set() {
        assert!(interest_set("").is_empty());
        assert!(interest_set("  ").is_empty());
        assert!(interest_set(",,").is_empty());
    }

    #[test]
    fn test_jaccard_one_of_three() {
        let a = interest_set("a,b");
        let b = interest_set("b,c");
        let j = jaccard_index(&a, &b);
        assert!((j - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard_identical_sets() {
        let a = interest_set("hiking,music");
        assert!((jaccard_index(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard_empty_set_is_zero() {
        let a = interest_set("hiking");
        let empty = interest_set("");
        assert_eq!(jaccard_index(&a, &empty), 0.0);
        assert_eq!(jaccard_index(&empty, &a), 0.0);
        assert_eq!(jaccard_index(&empty, &empty), 0.0);
    }

    #[test]
    fn test_shared_interests_sorted() {
        let a = interest_set("music,hiking,travel");
        let b = interest_set("travel,music,cooking");
        assert_eq!(shared_interests(&a, &b), vec!["music", "travel"]);
    }
}
