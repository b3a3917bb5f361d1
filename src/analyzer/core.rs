use crate::{
    analyzer::{
        compiler::to_postfix,
        evaluator::{EvalResult, evaluate},
        lexer::{Token, tokenize, tokenize_signed},
        parser::parse,
        sanitizer::{InvalidFragment, Sanitized, sanitize},
        validator::{KeywordPolicy, validate, value_token},
    },
    diagnostic::{self, Category, Diagnostic},
    error::AnalysisError,
};

/// File label used when the document has never been saved.
pub const UNNAMED: &str = "unnamed";

/// What kind of text a run expects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// A single declaration such as `const x : int = 2 + 3 ;`. The keywords
    /// and symbols are validated, then the declared value is parsed and
    /// evaluated.
    #[default]
    Declaration,
    /// A bare arithmetic expression such as `2 + 3 * 4`, parsed, compiled to
    /// postfix and evaluated.
    Expression,
}

/// Settings for an analysis run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// What kind of text to expect.
    pub mode:           Mode,
    /// When absent declaration keywords are reported.
    pub keyword_policy: KeywordPolicy,
}

impl Options {
    /// Options for the given mode with the default keyword policy.
    #[must_use]
    pub fn with_mode(mode: Mode) -> Self {
        Self { mode,
               ..Self::default() }
    }
}

/// A document handed over for analysis. Never modified by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    text: String,
    file: String,
}

impl SourceText {
    /// Wraps `text` read from the file labelled `file`.
    pub fn new(text: impl Into<String>, file: impl Into<String>) -> Self {
        Self { text: text.into(),
               file: file.into() }
    }

    /// Wraps `text` from a document without a file.
    pub fn unnamed(text: impl Into<String>) -> Self {
        Self::new(text, UNNAMED)
    }

    /// The full document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The file label.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }
}

/// A successfully computed value together with the program that produced
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The evaluated expression in postfix order.
    pub postfix: Vec<Token>,
    /// The value of the expression.
    pub value:   i64,
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Mode the run was made in.
    pub mode:        Mode,
    /// Character runs the sanitizer removed.
    pub fragments:   Vec<InvalidFragment>,
    /// Structural and syntax errors, in detection order.
    pub errors:      Vec<AnalysisError>,
    /// The table rows built from `fragments` and `errors`.
    pub diagnostics: Vec<Diagnostic>,
    /// Present only when there are no diagnostics and there was something to
    /// evaluate.
    pub outcome:     Option<EvalResult<Evaluation>>,
}

impl Analysis {
    /// Returns `true` when no diagnostic was produced.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns `true` when the run produced diagnostics or failed to
    /// evaluate.
    #[must_use]
    pub const fn failed(&self) -> bool {
        !self.is_clean() || matches!(self.outcome, Some(Err(_)))
    }

    /// The computed value, if evaluation ran and succeeded.
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        match &self.outcome {
            Some(Ok(evaluation)) => Some(evaluation.value),
            _ => None,
        }
    }
}

/// Runs the analysis pipeline over documents.
///
/// An `Analyzer` holds only its [`Options`]; every run builds fresh state
/// and leaves nothing behind, so one analyzer can serve any number of runs,
/// from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    options: Options,
}

impl Analyzer {
    /// Creates an analyzer with the given options.
    #[must_use]
    pub const fn new(options: Options) -> Self {
        Self { options }
    }

    /// The options this analyzer runs with.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Analyzes one document from scratch.
    ///
    /// The text is sanitized, then checked according to the mode. Invalid
    /// fragments never stop the checks: every diagnostic is collected in one
    /// pass. Only when the diagnostic list is empty is the expression
    /// compiled to postfix and evaluated.
    ///
    /// # Parameters
    /// - `source`: The document.
    ///
    /// # Returns
    /// The diagnostics and, for a clean document, the evaluation outcome.
    ///
    /// # Example
    /// ```
    /// use poliz::analyzer::core::{Analyzer, Mode, Options, SourceText};
    ///
    /// let analyzer = Analyzer::new(Options::with_mode(Mode::Expression));
    /// let analysis = analyzer.run(&SourceText::unnamed("( 1 + 2 ) * 3"));
    /// assert!(analysis.is_clean());
    /// assert_eq!(analysis.value(), Some(9));
    /// ```
    #[must_use]
    pub fn run(&self, source: &SourceText) -> Analysis {
        let Sanitized { cleaned, fragments } = sanitize(source.text());

        let (errors, expression) = match self.options.mode {
            Mode::Declaration => self.check_declaration(&cleaned),
            Mode::Expression => check_expression(&cleaned),
        };

        let category = match self.options.mode {
            Mode::Declaration => Category::Error,
            Mode::Expression => Category::SyntaxError,
        };
        let diagnostics = diagnostic::collect(source.file(), &fragments, category, &errors);

        let outcome = if diagnostics.is_empty() {
            expression.map(|tokens| compile_and_evaluate(&tokens))
        } else {
            None
        };

        log::debug!("analysis of '{}' finished: {} diagnostic(s), outcome {:?}",
                    source.file(),
                    diagnostics.len(),
                    outcome.as_ref().map(|o| o.as_ref().map(|e| e.value)));

        Analysis { mode: self.options.mode,
                   fragments,
                   errors,
                   diagnostics,
                   outcome }
    }

    /// Validates a declaration and, if its shape is right, parses its value.
    fn check_declaration(&self, cleaned: &str) -> (Vec<AnalysisError>, Option<Vec<Token>>) {
        let mut errors: Vec<AnalysisError> =
            validate(cleaned, self.options.keyword_policy).into_iter()
                                                          .map(AnalysisError::from)
                                                          .collect();
        if !errors.is_empty() {
            return (errors, None);
        }

        let Some(value) = value_token(cleaned) else {
            return (errors, None);
        };
        let tokens = tokenize_signed(value);
        errors.extend(parse(&tokens).into_iter().map(AnalysisError::from));

        (errors, Some(tokens))
    }
}

/// Parses a bare expression.
fn check_expression(cleaned: &str) -> (Vec<AnalysisError>, Option<Vec<Token>>) {
    let tokens = tokenize(cleaned);
    let errors = parse(&tokens).into_iter().map(AnalysisError::from).collect();

    (errors, Some(tokens))
}

/// Compiles tokens that parsed cleanly and runs the result.
fn compile_and_evaluate(tokens: &[Token]) -> EvalResult<Evaluation> {
    let postfix = to_postfix(tokens);
    let value = evaluate(&postfix)?;

    Ok(Evaluation { postfix,
                    value })
}
