/// Declaration errors.
///
/// Raised by the declaration validator when a required keyword or symbol is
/// missing, or when a token looks like a misspelled keyword.
pub mod structural_error;
/// Expression syntax errors.
///
/// Collected by the recursive-descent parser. The parser never stops at the
/// first one; every problem found in a single pass is reported.
pub mod syntax_error;
/// Evaluation errors.
///
/// Raised by the postfix stack machine. Unlike the other categories these are
/// terminal: the first one ends the run.
pub mod eval_error;
/// Either kind of accumulated error.
///
/// Declaration runs report structural errors and, for the declared value,
/// syntax errors in one list; this enum holds both.
pub mod analysis_error;

pub use analysis_error::AnalysisError;
pub use eval_error::EvalError;
pub use structural_error::StructuralError;
pub use syntax_error::SyntaxError;
