//! # poliz
//!
//! poliz is the analysis core of a small teaching editor. Its "run" action
//! hands the active document to this crate, which sanitizes the text,
//! validates a declaration (with typo recovery for keywords) or parses an
//! arithmetic expression, compiles the expression to postfix notation and
//! evaluates it on a stack machine.
//!
//! The editor itself is not part of this crate: it supplies the text and a
//! file label and displays the returned diagnostics and value.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::analyzer::core::{Analysis, Analyzer, Options, SourceText};

/// The analysis pipeline.
///
/// This module ties the stages together: sanitizer, tokenizer, declaration
/// validator, expression parser, postfix compiler and evaluator. Data only
/// flows downstream; each run starts from scratch.
///
/// # Responsibilities
/// - Removes and reports invalid character runs.
/// - Checks declarations for keywords and symbols, flagging likely typos.
/// - Parses arithmetic expressions, reporting every syntax error in one pass.
/// - Compiles valid expressions to postfix and evaluates them.
pub mod analyzer;
/// Diagnostic records shown to the user.
///
/// This module turns removed fragments and accumulated errors into numbered
/// table rows carrying an error code, a category label, the file label and a
/// line.
///
/// # Responsibilities
/// - Assigns `E001` to invalid fragments and `E002` to other errors.
/// - Numbers rows from 1 within each category.
pub mod diagnostic;
/// Provides error types for every stage.
///
/// Structural and syntax errors are accumulated and reported as diagnostics;
/// evaluation errors end a run.
///
/// # Responsibilities
/// - Defines one error enum per category.
/// - Implements `Display` with the user-facing message of each error.
pub mod error;
/// General helpers.
///
/// # Responsibilities
/// - Levenshtein edit distance and the bounded near-miss test built on it.
pub mod util;

/// Analyzes a document with the given options.
///
/// This is a shorthand for building an [`Analyzer`] and running it once.
/// The returned [`Analysis`] holds the diagnostics, and for a clean document
/// the evaluated value.
///
/// # Examples
/// ```
/// use poliz::{
///     analyze,
///     analyzer::core::{Mode, Options, SourceText},
/// };
///
/// // A well-formed declaration evaluates its value.
/// let source = SourceText::unnamed("const x : int = 2 + 3 * 4 ;");
/// let analysis = analyze(&source, Options::default());
/// assert!(analysis.is_clean());
/// assert_eq!(analysis.value(), Some(14));
///
/// // A stray character is removed and reported, so nothing is evaluated.
/// let source = SourceText::new("1 + 2 $", "sum.txt");
/// let analysis = analyze(&source, Options::with_mode(Mode::Expression));
/// assert_eq!(analysis.diagnostics.len(), 1);
/// assert_eq!(analysis.diagnostics[0].text, "$");
/// assert_eq!(analysis.value(), None);
/// ```
#[must_use]
pub fn analyze(source: &SourceText, options: Options) -> Analysis {
    Analyzer::new(options).run(source)
}
