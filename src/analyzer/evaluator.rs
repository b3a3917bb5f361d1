use crate::{
    analyzer::lexer::{BinaryOperator, Token},
    error::EvalError,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

impl BinaryOperator {
    /// Applies the operator to two integers.
    ///
    /// Arithmetic is checked: a result outside `i64` is
    /// [`EvalError::Overflow`], never a wrapped value. Division is floor
    /// division, rounding toward negative infinity, so `-7 / 2` is `-4`.
    ///
    /// # Example
    /// ```
    /// use poliz::{analyzer::lexer::BinaryOperator, error::EvalError};
    ///
    /// assert_eq!(BinaryOperator::Div.apply(7, 2), Ok(3));
    /// assert_eq!(BinaryOperator::Div.apply(-7, 2), Ok(-4));
    /// assert_eq!(BinaryOperator::Div.apply(1, 0), Err(EvalError::DivisionByZero));
    /// assert_eq!(BinaryOperator::Add.apply(i64::MAX, 1), Err(EvalError::Overflow));
    /// ```
    pub fn apply(self, a: i64, b: i64) -> EvalResult<i64> {
        match self {
            Self::Add => a.checked_add(b).ok_or(EvalError::Overflow),
            Self::Sub => a.checked_sub(b).ok_or(EvalError::Overflow),
            Self::Mul => a.checked_mul(b).ok_or(EvalError::Overflow),
            Self::Div => floor_div(a, b),
        }
    }
}

/// Integer division rounding toward negative infinity.
fn floor_div(a: i64, b: i64) -> EvalResult<i64> {
    if b == 0 {
        return Err(EvalError::DivisionByZero);
    }

    let quotient = a.checked_div(b).ok_or(EvalError::Overflow)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        return Ok(quotient - 1);
    }
    Ok(quotient)
}

/// Runs a postfix program on a value stack and returns the single result.
///
/// Numbers are pushed. An operator pops its right operand, then its left
/// operand, and pushes the result of applying itself to them.
///
/// # Parameters
/// - `program`: Tokens in postfix order.
///
/// # Returns
/// The one value left on the stack.
///
/// # Errors
/// - [`EvalError::InvalidOperand`] when an operator finds fewer than two
///   values, or a token is neither a number nor an operator.
/// - [`EvalError::DivisionByZero`] and [`EvalError::Overflow`] from the
///   arithmetic itself.
/// - [`EvalError::MalformedProgram`] when the stack does not end with
///   exactly one value.
///
/// # Example
/// ```
/// use poliz::{
///     analyzer::{evaluator::evaluate, lexer::Token},
///     error::EvalError,
/// };
///
/// let program = [Token::Number(2), Token::Number(3), Token::Number(4), Token::Star, Token::Plus];
/// assert_eq!(evaluate(&program), Ok(14));
///
/// let program = [Token::Number(4), Token::Number(0), Token::Slash];
/// assert_eq!(evaluate(&program), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(program: &[Token]) -> EvalResult<i64> {
    let mut stack: Vec<i64> = Vec::new();

    for token in program {
        if let Token::Number(n) = token {
            stack.push(*n);
            continue;
        }

        let invalid = || EvalError::InvalidOperand { token: token.to_string() };
        let op = token.operator().ok_or_else(invalid)?;
        let b = stack.pop().ok_or_else(invalid)?;
        let a = stack.pop().ok_or_else(invalid)?;
        stack.push(op.apply(a, b)?);
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        rest => Err(EvalError::MalformedProgram { remaining: rest.len() }),
    }
}
