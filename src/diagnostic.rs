use crate::analyzer::sanitizer::InvalidFragment;

/// Line reported for every diagnostic. The whole buffer is analyzed as one
/// logical unit, so no finer position is tracked.
pub const LINE: usize = 1;

/// Error codes shown in the first column of the diagnostics table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorCode {
    /// A run of invalid characters was removed.
    E001,
    /// The text is structurally or syntactically wrong.
    E002,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E001").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::E001 => "E001",
            Self::E002 => "E002",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic categories. Ordinals restart at 1 in each one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    /// Characters removed by the sanitizer.
    InvalidFragment,
    /// Declaration errors, including syntax errors in the declared value.
    Error,
    /// Expression syntax errors.
    SyntaxError,
}

impl Category {
    /// The code every diagnostic of this category carries.
    #[must_use]
    pub const fn code(self) -> ErrorCode {
        match self {
            Self::InvalidFragment => ErrorCode::E001,
            Self::Error | Self::SyntaxError => ErrorCode::E002,
        }
    }

    /// Human-readable label for the category column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InvalidFragment => "invalid fragment",
            Self::Error => "error",
            Self::SyntaxError => "syntax error",
        }
    }
}

/// One row of the diagnostics table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Error code.
    pub code:     ErrorCode,
    /// Category the row belongs to.
    pub category: Category,
    /// The removed fragment, or the error message.
    pub text:     String,
    /// 1-based position within the row's category.
    pub ordinal:  usize,
    /// Label of the analyzed file.
    pub file:     String,
    /// Always [`LINE`].
    pub line:     usize,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{} | {} | {} | {} | {} | {}",
               self.code,
               self.category.label(),
               self.text,
               self.ordinal,
               self.file,
               self.line)
    }
}

/// Builds the numbered diagnostics of one category.
///
/// # Parameters
/// - `category`: Category of every produced row.
/// - `file`: File label copied into each row.
/// - `texts`: Row texts, in reporting order.
///
/// # Returns
/// One diagnostic per text, numbered from 1.
///
/// # Example
/// ```
/// use poliz::diagnostic::{Category, ErrorCode, numbered};
///
/// let rows = numbered(Category::SyntaxError, "a.txt", ["first", "second"]);
/// assert_eq!(rows[1].ordinal, 2);
/// assert_eq!(rows[1].code, ErrorCode::E002);
/// assert_eq!(rows[1].to_string(), "E002 | syntax error | second | 2 | a.txt | 1");
/// ```
#[must_use]
pub fn numbered<I>(category: Category, file: &str, texts: I) -> Vec<Diagnostic>
    where I: IntoIterator,
          I::Item: ToString
{
    texts.into_iter()
         .enumerate()
         .map(|(i, text)| Diagnostic { code: category.code(),
                                       category,
                                       text: text.to_string(),
                                       ordinal: i + 1,
                                       file: file.to_string(),
                                       line: LINE })
         .collect()
}

/// Builds the full diagnostic list of a run: invalid fragments first, then
/// `errors` under `error_category`, each numbered from 1.
#[must_use]
pub fn collect<E: std::fmt::Display>(file: &str,
                                     fragments: &[InvalidFragment],
                                     error_category: Category,
                                     errors: &[E])
                                     -> Vec<Diagnostic> {
    let mut diagnostics = numbered(Category::InvalidFragment, file, fragments);
    diagnostics.extend(numbered(error_category, file, errors));
    diagnostics
}
