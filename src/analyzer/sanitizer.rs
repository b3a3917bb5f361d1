/// A maximal run of characters removed from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFragment {
    /// The removed characters, exactly as they appeared.
    pub text:   String,
    /// Byte offset of the run's first character in the original text.
    pub offset: usize,
}

impl std::fmt::Display for InvalidFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Output of [`sanitize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sanitized {
    /// The input with every invalid run removed. Whitespace and structural
    /// symbols stay in place.
    pub cleaned:   String,
    /// The removed runs, in source order.
    pub fragments: Vec<InvalidFragment>,
}

impl Sanitized {
    /// Returns `true` if nothing had to be removed.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Returns `true` for characters that may appear inside a lexeme: Unicode
/// letters and digits (Cyrillic included), `_`, and the arithmetic symbols.
#[must_use]
pub fn is_lexical(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || matches!(c, '+' | '-' | '*' | '/' | '(' | ')')
}

/// Returns `true` for characters that separate lexemes and are always kept:
/// whitespace and the structural symbols `:`, `=` and `;`.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ':' | '=' | ';')
}

/// Removes invalid character runs from `text` and reports them.
///
/// The text is scanned left to right. Lexical characters and separators are
/// copied to the output unchanged, so a signed number such as `-5` survives
/// as written. Any other character opens an invalid run that extends up to
/// the next lexical character or separator; the whole run is dropped from
/// the output and recorded as one [`InvalidFragment`]. A run that reaches the
/// end of the input is still recorded.
///
/// # Parameters
/// - `text`: Raw document text.
///
/// # Returns
/// The cleaned text and the removed runs in source order.
///
/// # Example
/// ```
/// use poliz::analyzer::sanitizer::sanitize;
///
/// let out = sanitize("const x§$ : int = -5 ;#");
/// assert_eq!(out.cleaned, "const x : int = -5 ;");
/// let removed: Vec<&str> = out.fragments.iter().map(|f| f.text.as_str()).collect();
/// assert_eq!(removed, ["§$", "#"]);
/// ```
#[must_use]
pub fn sanitize(text: &str) -> Sanitized {
    let mut cleaned = String::with_capacity(text.len());
    let mut fragments = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if is_lexical(c) || is_separator(c) {
            cleaned.push(c);
            continue;
        }

        let mut run = String::from(c);
        while let Some((_, next)) = chars.next_if(|&(_, n)| !is_lexical(n) && !is_separator(n)) {
            run.push(next);
        }
        fragments.push(InvalidFragment { text: run,
                                         offset });
    }

    log::debug!("sanitizer removed {} fragment(s)", fragments.len());

    Sanitized { cleaned,
                fragments }
}
