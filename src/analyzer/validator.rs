use std::collections::HashSet;

use crate::{error::StructuralError, util::distance::is_near_miss};

/// Largest edit distance at which a word still counts as a misspelled
/// keyword.
pub const MAX_KEYWORD_DISTANCE: usize = 2;

/// Structural symbols every declaration must contain, in reporting order.
pub const REQUIRED_SYMBOLS: [char; 3] = [':', '=', ';'];

/// The keywords a declaration is checked for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `const`
    Const,
    /// `val`
    Val,
    /// `int`
    Int,
}

impl Keyword {
    /// Every keyword, in the order they are checked and reported.
    pub const ALL: [Self; 3] = [Self::Const, Self::Val, Self::Int];

    /// Returns the keyword's spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Const => "const",
            Self::Val => "val",
            Self::Int => "int",
        }
    }

    /// Returns the keyword spelled exactly as `word`, if any.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == word)
    }

    /// Returns `true` if `word` looks like a botched spelling of this
    /// keyword: either it contains the keyword together with a digit
    /// (`const1`), or it is a near miss by edit distance (`cosnt`).
    #[must_use]
    pub fn is_confused_with(self, word: &str) -> bool {
        let kw = self.as_str();
        (word.contains(kw) && word.chars().any(char::is_numeric))
        || is_near_miss(word, kw, MAX_KEYWORD_DISTANCE)
    }
}

/// Decides when absent keywords are reported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum KeywordPolicy {
    /// One keyword, seen or misspelled, satisfies the requirement. When none
    /// is present every keyword is reported missing.
    #[default]
    AnyOf,
    /// Every keyword must be seen or misspelled; each absent one is reported.
    AllOf,
}

/// Returns the value part of a declaration.
///
/// This is the text between the first `=` and the first `;` after it (or the
/// end of the text), with surrounding whitespace trimmed.
///
/// # Example
/// ```
/// use poliz::analyzer::validator::value_token;
///
/// assert_eq!(value_token("const x : int = 2 + 3 ;"), Some("2 + 3"));
/// assert_eq!(value_token("const x : int = 7"), Some("7"));
/// assert_eq!(value_token("const x : int"), None);
/// ```
#[must_use]
pub fn value_token(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once('=')?;
    let value = rest.split_once(';').map_or(rest, |(value, _)| value);
    Some(value.trim())
}

/// Checks a declaration statement for its required keywords and symbols.
///
/// The declaration is expected to look like
/// `<keyword> <identifier> : <type> = <expr> ;`, but only presence and shape
/// are checked, not a full grammar. All rules run and every triggered rule
/// contributes one error, in this order:
///
/// 1. No `=` anywhere: [`StructuralError::MissingEquals`].
/// 2. For each whitespace-separated word that is not a keyword, not one of
///    `: = ;`, and not part of the value (see [`value_token`]):
///    - a leading digit gives [`StructuralError::StartsWithDigit`];
///    - the first keyword the word is confused with (see
///      [`Keyword::is_confused_with`]) gives
///      [`StructuralError::KeywordExpected`] and marks that keyword as
///      mistaken.
/// 3. Keywords neither seen nor mistaken give
///    [`StructuralError::MissingKeyword`], as governed by `policy`.
/// 4. Each of `: = ;` absent from the text gives
///    [`StructuralError::MissingSymbol`].
///
/// # Parameters
/// - `text`: Sanitized declaration text.
/// - `policy`: When absent keywords are reported.
///
/// # Returns
/// The errors in detection order; empty means the declaration is well formed.
///
/// # Example
/// ```
/// use poliz::{
///     analyzer::validator::{KeywordPolicy, validate},
///     error::StructuralError,
/// };
///
/// let errors = validate("cosnt x : int = 5 ;", KeywordPolicy::AnyOf);
/// assert_eq!(errors,
///            vec![StructuralError::KeywordExpected { keyword: "const",
///                                                    found:   "cosnt".to_string(), }]);
/// ```
#[must_use]
pub fn validate(text: &str, policy: KeywordPolicy) -> Vec<StructuralError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut mistaken = HashSet::new();

    if !text.contains('=') {
        errors.push(StructuralError::MissingEquals);
    }

    let value = value_token(text).filter(|v| !v.is_empty());

    for word in text.split_whitespace() {
        if let Some(kw) = Keyword::from_word(word) {
            seen.insert(kw);
            continue;
        }
        if is_symbol_word(word) || value.is_some_and(|v| v.contains(word)) {
            continue;
        }

        if word.starts_with(char::is_numeric) {
            errors.push(StructuralError::StartsWithDigit { token: word.to_string() });
        }

        if let Some(kw) = Keyword::ALL.into_iter().find(|kw| kw.is_confused_with(word)) {
            errors.push(StructuralError::KeywordExpected { keyword: kw.as_str(),
                                                           found:   word.to_string(), });
            mistaken.insert(kw);
        }
    }

    let present = |kw: &Keyword| seen.contains(kw) || mistaken.contains(kw);
    let report_missing = match policy {
        KeywordPolicy::AllOf => true,
        KeywordPolicy::AnyOf => !Keyword::ALL.iter().any(present),
    };
    if report_missing {
        errors.extend(Keyword::ALL.into_iter()
                                  .filter(|kw| !present(kw))
                                  .map(|kw| StructuralError::MissingKeyword { keyword: kw.as_str() }));
    }

    errors.extend(REQUIRED_SYMBOLS.into_iter()
                                  .filter(|&symbol| !text.contains(symbol))
                                  .map(|symbol| StructuralError::MissingSymbol { symbol }));

    log::debug!("declaration validator found {} error(s)", errors.len());

    errors
}

fn is_symbol_word(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if REQUIRED_SYMBOLS.contains(&c))
}
