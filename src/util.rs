/// String similarity helpers.
///
/// This module provides the Levenshtein edit distance used by the declaration
/// validator to recognize misspelled keywords, plus the bounded "near miss"
/// test built on top of it.
pub mod distance;
