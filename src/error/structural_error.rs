#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a problem with the shape of a declaration statement.
pub enum StructuralError {
    /// The text contains no `=` at all.
    MissingEquals,
    /// A word starts with a digit where an identifier or keyword belongs.
    StartsWithDigit {
        /// The offending word.
        token: String,
    },
    /// A word looks like a misspelling of a required keyword.
    KeywordExpected {
        /// The keyword the word was probably meant to be.
        keyword: &'static str,
        /// The word that was found instead.
        found:   String,
    },
    /// A required keyword appears nowhere in the declaration.
    MissingKeyword {
        /// The missing keyword.
        keyword: &'static str,
    },
    /// A required structural symbol appears nowhere in the declaration.
    MissingSymbol {
        /// The missing symbol.
        symbol: char,
    },
}

impl StructuralError {
    /// Returns the keyword this error names, if any.
    ///
    /// Both misspelled and missing keywords name one.
    #[must_use]
    pub const fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::KeywordExpected { keyword, .. } | Self::MissingKeyword { keyword } => {
                Some(*keyword)
            },
            _ => None,
        }
    }
}

impl std::fmt::Display for StructuralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEquals => write!(f, "missing `=` token"),
            Self::StartsWithDigit { token } => {
                write!(f, "token cannot start with a digit (`{token}`)")
            },
            Self::KeywordExpected { keyword, found } => write!(f,
                                                               "expected keyword `{keyword}`, found identifier `{found}`"),
            Self::MissingKeyword { keyword } => write!(f, "missing keyword (`{keyword}`)"),
            Self::MissingSymbol { symbol } => write!(f, "missing token (`{symbol}`)"),
        }
    }
}

impl std::error::Error for StructuralError {}
