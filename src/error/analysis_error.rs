use crate::error::{StructuralError, SyntaxError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// An error reported in the error category of a run's diagnostics.
pub enum AnalysisError {
    /// The declaration is missing or misspells something it requires.
    Structural(StructuralError),
    /// The expression does not follow the arithmetic grammar.
    Syntax(SyntaxError),
}

impl From<StructuralError> for AnalysisError {
    fn from(e: StructuralError) -> Self {
        Self::Structural(e)
    }
}

impl From<SyntaxError> for AnalysisError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structural(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AnalysisError {}
