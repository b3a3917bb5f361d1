/// Pipeline driver.
///
/// Holds the run options, the document wrapper and the [`Analyzer`] that
/// strings the stages below together into one analysis run.
///
/// [`Analyzer`]: core::Analyzer
pub mod core;
/// Removes invalid character runs from raw text.
///
/// The first stage. Everything that cannot be part of a lexeme, a separator
/// or a structural symbol is cut out and reported, never treated as fatal.
pub mod sanitizer;
/// Splits sanitized text into tokens.
///
/// Built on `logos`. Digit runs become numbers, operators and parentheses
/// their own tokens, and any other character a one-character identifier.
pub mod lexer;
/// Keyword and symbol checks for declarations.
///
/// Uses edit distance to turn likely typos of `const`, `val` and `int` into
/// targeted errors instead of a generic complaint.
pub mod validator;
/// Recursive-descent parser for arithmetic expressions.
///
/// Collects every syntax error in one pass instead of stopping at the first.
pub mod parser;
/// Infix to postfix compiler.
pub mod compiler;
/// Postfix stack machine.
pub mod evaluator;
