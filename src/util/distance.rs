/// Returns the Levenshtein edit distance between two strings.
///
/// Insertions, deletions and substitutions each cost one. The distance is
/// computed over Unicode scalar values, not bytes, so `"ж"` and `"z"` are one
/// substitution apart.
///
/// The classic two-row dynamic program is used: the shorter string indexes
/// the row, so memory is `O(min(len(a), len(b)))` and time is
/// `O(len(a) * len(b))`.
///
/// ## Parameters
/// - `a`: First string.
/// - `b`: Second string.
///
/// ## Returns
/// The minimum number of single-character edits turning `a` into `b`.
///
/// ## Example
/// ```
/// use poliz::util::distance::levenshtein;
///
/// assert_eq!(levenshtein("const", "const"), 0);
/// assert_eq!(levenshtein("cat", "cats"), 1);
/// assert_eq!(levenshtein("const", "cosnt"), 2);
/// assert_eq!(levenshtein("", "int"), 3);
/// ```
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let insertion = previous[j + 1] + 1;
            let deletion = current[j] + 1;
            let substitution = previous[j] + usize::from(lc != sc);
            current[j + 1] = insertion.min(deletion).min(substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}

/// Returns `true` when `candidate` is a plausible misspelling of `target`.
///
/// A candidate qualifies when its length is within one of the target's and
/// the edit distance between the two is at most `max_distance`.
///
/// ## Example
/// ```
/// use poliz::util::distance::is_near_miss;
///
/// assert!(is_near_miss("cosnt", "const", 2));
/// assert!(is_near_miss("vall", "val", 2));
/// assert!(!is_near_miss("constant", "const", 2));
/// ```
#[must_use]
pub fn is_near_miss(candidate: &str, target: &str, max_distance: usize) -> bool {
    let candidate_len = candidate.chars().count();
    let target_len = target.chars().count();

    candidate_len.abs_diff(target_len) <= 1 && levenshtein(candidate, target) <= max_distance
}
