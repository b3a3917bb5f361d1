use std::ops::Range;

use logos::Logos;

/// Represents a lexical token of an arithmetic expression or declaration.
///
/// Digit runs become numbers, each of `+ - * / ( ) : = ;` becomes its own
/// token and any other non-whitespace character becomes a one-character
/// [`Token::Identifier`]. Whitespace, in the Unicode sense, only separates
/// tokens.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),
    /// A digit run too large for an `i64`, kept verbatim for error reporting.
    Oversized(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Any other single character, such as a letter of a stray identifier.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Identifier(String),
    /// End-of-input sentinel. Never produced by [`tokenize`]; the parser
    /// appends it.
    Eof,
}

/// Errors the lexer can produce internally.
///
/// They never escape [`tokenize`]: a too-large literal is turned into
/// [`Token::Oversized`] and anything else into a one-character identifier.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A digit run does not fit in an `i64`.
    LiteralTooLarge,
    /// The input matched no token rule.
    #[default]
    UnknownCharacter,
}

/// The four binary arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Binding strength used by the postfix compiler. Multiplicative
    /// operators bind tighter than additive ones; all are left-associative.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

impl Token {
    /// Returns the binary operator this token denotes, if it is one.
    ///
    /// # Example
    /// ```
    /// use poliz::analyzer::lexer::{BinaryOperator, Token};
    ///
    /// assert_eq!(Token::Star.operator(), Some(BinaryOperator::Mul));
    /// assert_eq!(Token::LParen.operator(), None);
    /// ```
    #[must_use]
    pub const fn operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Sub),
            Self::Star => Some(BinaryOperator::Mul),
            Self::Slash => Some(BinaryOperator::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Oversized(s) | Self::Identifier(s) => write!(f, "{s}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Colon => write!(f, ":"),
            Self::Equals => write!(f, "="),
            Self::Semicolon => write!(f, ";"),
            Self::Eof => write!(f, "EOF"),
        }
    }
}

/// Splits text into tokens.
///
/// Whitespace separates tokens and is dropped. Every maximal digit run is a
/// single [`Token::Number`]; every other character is a token of its own.
/// The end-of-input sentinel is not appended here.
///
/// # Parameters
/// - `text`: Sanitized source text.
///
/// # Returns
/// The tokens in source order.
///
/// # Example
/// ```
/// use poliz::analyzer::lexer::{Token, tokenize};
///
/// let tokens = tokenize("12*(3 - x)");
/// assert_eq!(tokens,
///            vec![Token::Number(12),
///                 Token::Star,
///                 Token::LParen,
///                 Token::Number(3),
///                 Token::Minus,
///                 Token::Identifier("x".to_string()),
///                 Token::RParen]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    spanned_tokens(text).into_iter().map(|(token, _)| token).collect()
}

/// Splits text into tokens, reading a sign glued to a digit run as part of
/// a signed literal.
///
/// A `+` or `-` directly followed by digits, with nothing in between, is
/// folded into one [`Token::Number`] when it stands where an operand is
/// expected: at the start, after an operator or after `(`. Anywhere else it
/// stays a binary operator, so `2 -5` is still a subtraction. This is how
/// declaration values such as `-5` are read.
///
/// # Parameters
/// - `text`: Sanitized source text.
///
/// # Returns
/// The tokens in source order.
///
/// # Example
/// ```
/// use poliz::analyzer::lexer::{Token, tokenize_signed};
///
/// assert_eq!(tokenize_signed("-5"), vec![Token::Number(-5)]);
/// assert_eq!(tokenize_signed("2 -5"),
///            vec![Token::Number(2), Token::Minus, Token::Number(5)]);
/// assert_eq!(tokenize_signed("3*(-2)"),
///            vec![Token::Number(3),
///                 Token::Star,
///                 Token::LParen,
///                 Token::Number(-2),
///                 Token::RParen]);
/// ```
#[must_use]
pub fn tokenize_signed(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut spanned = spanned_tokens(text).into_iter().peekable();

    while let Some((token, span)) = spanned.next() {
        let operand_expected =
            tokens.last().is_none_or(|prev| prev.operator().is_some() || *prev == Token::LParen);

        if operand_expected
           && matches!(token, Token::Plus | Token::Minus)
           && let Some((_, digits)) = spanned.next_if(|(next, next_span)| {
                                                 next_span.start == span.end
                                                 && matches!(next, Token::Number(_) | Token::Oversized(_))
                                             })
        {
            let literal = &text[span.start..digits.end];
            tokens.push(literal.parse()
                               .map_or_else(|_| Token::Oversized(literal.to_string()), Token::Number));
            continue;
        }

        tokens.push(token);
    }

    tokens
}

/// Runs the lexer and pairs every token with its byte range.
fn spanned_tokens(text: &str) -> Vec<(Token, Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(text);

    while let Some(token) = lexer.next() {
        let token = match token {
            Ok(tok) => tok,
            Err(LexError::LiteralTooLarge) => Token::Oversized(lexer.slice().to_string()),
            Err(LexError::UnknownCharacter) => Token::Identifier(lexer.slice().to_string()),
        };
        tokens.push((token, lexer.span()));
    }

    tokens
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(i64)`: The parsed integer value.
/// - `Err(LexError::LiteralTooLarge)`: If the digits overflow an `i64`.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}
