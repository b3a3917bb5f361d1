use crate::analyzer::lexer::Token;

/// Compiles an infix token sequence into postfix (reverse Polish) order.
///
/// This is the operator-precedence ("shunting-yard") algorithm. Numbers go
/// straight to the output, `(` is stacked, `)` unstacks operators up to the
/// matching `(` and drops both parentheses, and an operator first unstacks
/// every stacked operator of equal or higher precedence (all operators are
/// left-associative). Whatever is still stacked at the end is appended in
/// stack order.
///
/// Only token sequences that [`parse`](crate::analyzer::parser::parse)
/// accepted are meaningful input. Anything that is neither a number, an
/// operator nor a parenthesis is copied through unchanged, so the evaluator
/// rejects it instead of it vanishing silently.
///
/// # Parameters
/// - `tokens`: Infix tokens, without the end sentinel.
///
/// # Returns
/// The tokens in postfix order.
///
/// # Example
/// ```
/// use poliz::analyzer::{
///     compiler::{render_postfix, to_postfix},
///     lexer::tokenize,
/// };
///
/// let postfix = to_postfix(&tokenize("2 + 3 * 4"));
/// assert_eq!(render_postfix(&postfix), "2 3 4 * +");
///
/// let postfix = to_postfix(&tokenize("(1 - 2) * 3 - 4"));
/// assert_eq!(render_postfix(&postfix), "1 2 - 3 * 4 -");
/// ```
#[must_use]
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<&Token> = Vec::new();

    for token in tokens {
        match token {
            Token::LParen => stack.push(token),
            Token::RParen => {
                while let Some(top) = stack.pop() {
                    if *top == Token::LParen {
                        break;
                    }
                    output.push(top.clone());
                }
            },
            Token::Eof => {},
            _ => {
                if let Some(op) = token.operator() {
                    while let Some(top) = stack.last()
                          && let Some(top_op) = top.operator()
                          && top_op.precedence() >= op.precedence()
                    {
                        output.push((*top).clone());
                        stack.pop();
                    }
                    stack.push(token);
                } else {
                    output.push(token.clone());
                }
            },
        }
    }

    output.extend(stack.into_iter().rev().cloned());

    log::trace!("postfix program: {}", render_postfix(&output));

    output
}

/// Renders a postfix program as space-separated lexemes, e.g. `2 3 4 * +`.
#[must_use]
pub fn render_postfix(program: &[Token]) -> String {
    program.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
