#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a syntax error found while parsing an arithmetic expression.
pub enum SyntaxError {
    /// A number or `(` was required but something else was found.
    ExpectedOperand {
        /// The token encountered (`EOF` at the end of input).
        found: String,
    },
    /// A parenthesized expression was not closed.
    ExpectedClosingParen,
    /// Tokens remain after a complete expression was parsed.
    UnexpectedTrailingToken {
        /// The first leftover token.
        token: String,
    },
    /// A digit run does not fit in a 64-bit signed integer.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
    },
    /// Parentheses are nested deeper than the parser descends.
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedOperand { found } => {
                write!(f, "expected number or `(`, found `{found}`")
            },
            Self::ExpectedClosingParen => write!(f, "expected closing `)`"),
            Self::UnexpectedTrailingToken { token } => {
                write!(f, "unexpected trailing token: `{token}`")
            },
            Self::LiteralTooLarge { literal } => write!(f, "literal `{literal}` is too large"),
            Self::NestingTooDeep { limit } => {
                write!(f, "parentheses nested deeper than {limit} levels")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
