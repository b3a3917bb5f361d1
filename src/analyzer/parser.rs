use crate::{analyzer::lexer::Token, error::SyntaxError};

/// Deepest parenthesis nesting the parser descends into.
pub const MAX_NESTING: usize = 256;

/// Parses an arithmetic expression and returns every syntax error found.
///
/// The grammar is:
///
/// ```text
/// expression := term (("+" | "-") term)*
/// term       := operand (("*" | "/") operand)*
/// operand    := NUMBER | "(" expression ")"
/// ```
///
/// Parsing never stops early. When an operand is expected but something else
/// is found, the error is recorded and that token is skipped, so a single
/// left-to-right pass reports all problems and always terminates. A missing
/// `)` is recorded without consuming anything. Tokens left over after the
/// top-level expression produce one trailing-token error.
///
/// # Parameters
/// - `tokens`: Tokens from [`tokenize`](crate::analyzer::lexer::tokenize),
///   without an end sentinel.
///
/// # Returns
/// The syntax errors in detection order; empty means the expression is
/// valid.
///
/// # Example
/// ```
/// use poliz::{
///     analyzer::{lexer::tokenize, parser::parse},
///     error::SyntaxError,
/// };
///
/// assert!(parse(&tokenize("1 + 2 * ( 3 - 4 )")).is_empty());
/// assert_eq!(parse(&tokenize("( 1 + 2")), vec![SyntaxError::ExpectedClosingParen]);
/// ```
#[must_use]
pub fn parse(tokens: &[Token]) -> Vec<SyntaxError> {
    let mut parser = Parser::new(tokens);
    parser.parse();

    log::debug!("parser found {} syntax error(s) in {} token(s)",
                parser.errors.len(),
                tokens.len());

    parser.errors
}

/// Cursor-based recursive-descent parser over a token list ending in
/// [`Token::Eof`].
struct Parser {
    tokens: Vec<Token>,
    pos:    usize,
    depth:  usize,
    errors: Vec<SyntaxError>,
}

impl Parser {
    fn new(tokens: &[Token]) -> Self {
        let mut tokens = tokens.to_vec();
        tokens.push(Token::Eof);

        Self { tokens,
               pos: 0,
               depth: 0,
               errors: Vec::new() }
    }

    /// Returns the token under the cursor. Past the end this keeps returning
    /// the sentinel.
    fn current(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    const fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consumes the current token if it equals `expected`.
    fn eat(&mut self, expected: &Token) -> bool {
        if self.current() == expected {
            self.advance();
            return true;
        }
        false
    }

    fn parse(&mut self) {
        self.expression();

        if *self.current() != Token::Eof {
            let token = self.current().to_string();
            self.errors.push(SyntaxError::UnexpectedTrailingToken { token });
        }
    }

    fn expression(&mut self) {
        self.term();
        while matches!(self.current(), Token::Plus | Token::Minus) {
            self.advance();
            self.term();
        }
    }

    fn term(&mut self) {
        self.operand();
        while matches!(self.current(), Token::Star | Token::Slash) {
            self.advance();
            self.operand();
        }
    }

    /// The only rule that can fail on its own. Every path through it consumes
    /// at least one token.
    fn operand(&mut self) {
        let start = self.pos;

        match self.current().clone() {
            Token::Number(_) => self.advance(),
            Token::Oversized(literal) => {
                self.errors.push(SyntaxError::LiteralTooLarge { literal });
                self.advance();
            },
            Token::LParen if self.depth >= MAX_NESTING => {
                self.errors.push(SyntaxError::NestingTooDeep { limit: MAX_NESTING });
                self.advance();
            },
            Token::LParen => {
                self.advance();
                self.depth += 1;
                self.expression();
                self.depth -= 1;
                if !self.eat(&Token::RParen) {
                    self.errors.push(SyntaxError::ExpectedClosingParen);
                }
            },
            found => {
                self.errors.push(SyntaxError::ExpectedOperand { found: found.to_string() });
                self.advance();
            },
        }

        debug_assert!(self.pos > start, "operand did not advance the cursor");
    }
}
