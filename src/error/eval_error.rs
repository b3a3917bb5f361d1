#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the postfix evaluator can raise.
pub enum EvalError {
    /// A `/` was applied with a zero divisor.
    DivisionByZero,
    /// An operator lacked operands, or a token was neither a number nor an
    /// operator.
    InvalidOperand {
        /// The token that could not be applied.
        token: String,
    },
    /// The stack did not reduce to exactly one value.
    MalformedProgram {
        /// How many values were left on the stack.
        remaining: usize,
    },
    /// The result does not fit in a 64-bit signed integer.
    Overflow,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::InvalidOperand { token } => write!(f, "Invalid operand for `{token}`."),
            Self::MalformedProgram { remaining } => write!(f,
                                                           "Malformed postfix program: {remaining} values left on the stack, expected 1."),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for EvalError {}
