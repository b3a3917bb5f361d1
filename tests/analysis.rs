use std::fs;

use poliz::{
    analyze,
    analyzer::{
        compiler::render_postfix,
        core::{Analysis, Analyzer, Mode, Options, SourceText, UNNAMED},
        validator::KeywordPolicy,
    },
    diagnostic::{Category, ErrorCode},
    error::EvalError,
};
use walkdir::WalkDir;

fn declaration(src: &str) -> Analysis {
    analyze(&SourceText::unnamed(src), Options::with_mode(Mode::Declaration))
}

fn expression(src: &str) -> Analysis {
    analyze(&SourceText::unnamed(src), Options::with_mode(Mode::Expression))
}

fn assert_value(analysis: &Analysis, expected: i64) {
    assert!(analysis.is_clean(), "unexpected diagnostics: {:#?}", analysis.diagnostics);
    assert_eq!(analysis.value(), Some(expected));
}

#[test]
fn sample_documents_behave() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/documents").into_iter()
                                       .filter_map(Result::ok)
                                       .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let text =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let components: Vec<_> = path.components()
                                     .map(|c| c.as_os_str().to_string_lossy().into_owned())
                                     .collect();
        let mode = if components.iter().any(|c| c == "expression") {
            Mode::Expression
        } else {
            Mode::Declaration
        };
        let expect_valid = components.iter().any(|c| c == "valid");

        count += 1;
        let source = SourceText::new(text.trim_end(), path.to_string_lossy());
        let analysis = analyze(&source, Options::with_mode(mode));

        if expect_valid {
            assert!(analysis.is_clean() && analysis.value().is_some(),
                    "{path:?} should analyze cleanly:\n{text}\n{:#?}",
                    analysis.diagnostics);
        } else {
            assert!(analysis.failed(), "{path:?} should fail:\n{text}");
        }
    }

    assert!(count > 0, "No documents found in tests/documents");
}

#[test]
fn declaration_end_to_end() {
    let analysis = declaration("const x : int = 2 + 3 * 4 ;");
    assert_value(&analysis, 14);
    assert!(analysis.errors.is_empty());
}

#[test]
fn declaration_values() {
    assert_value(&declaration("val total : int = ( 1 + 2 ) * 3 ;"), 9);
    assert_value(&declaration("const n : int = 42 ;"), 42);
    assert_value(&declaration("const n : int = 9 / 2 ;"), 4);
}

#[test]
fn declaration_accepts_signed_literals() {
    assert_value(&declaration("const x : int = -5 ;"), -5);
    assert_value(&declaration("const x : int = 3 * -2 ;"), -6);
    assert_value(&declaration("const x : int = 10 -4 ;"), 6);
}

#[test]
fn expression_mode_skips_unicode_whitespace() {
    assert_value(&expression("1\u{a0}+\u{a0}2"), 3);
    assert_value(&expression("1\u{b}+ 2"), 3);
}

#[test]
fn invalid_fragment_blocks_evaluation() {
    let analysis = declaration("const x§ : int = 5 ;");
    assert_eq!(analysis.diagnostics.len(), 1);

    let row = &analysis.diagnostics[0];
    assert_eq!(row.code, ErrorCode::E001);
    assert_eq!(row.category, Category::InvalidFragment);
    assert_eq!(row.text, "§");
    assert_eq!(row.ordinal, 1);
    assert_eq!(row.file, UNNAMED);
    assert_eq!(row.line, 1);
    assert!(analysis.outcome.is_none());
}

#[test]
fn ordinals_restart_per_category() {
    let analysis = declaration("cosnt x @ : int = 5 # ;");
    let rows: Vec<_> = analysis.diagnostics
                               .iter()
                               .map(|d| (d.code, d.text.as_str(), d.ordinal))
                               .collect();
    assert_eq!(rows,
               vec![(ErrorCode::E001, "@", 1),
                    (ErrorCode::E001, "#", 2),
                    (ErrorCode::E002, "expected keyword `const`, found identifier `cosnt`", 1)]);
    assert_eq!(analysis.diagnostics[2].category.label(), "error");
}

#[test]
fn declaration_value_syntax_is_checked() {
    let analysis = declaration("const x : int = 2 + ;");
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(analysis.diagnostics[0].text, "expected number or `(`, found `EOF`");
    assert_eq!(analysis.diagnostics[0].category, Category::Error);
    assert!(analysis.outcome.is_none());
}

#[test]
fn declaration_without_equals() {
    let analysis = declaration("const x : int ;");
    let texts: Vec<_> = analysis.diagnostics.iter().map(|d| d.text.as_str()).collect();
    assert_eq!(texts, ["missing `=` token", "missing token (`=`)"]);
    assert!(analysis.outcome.is_none());
}

#[test]
fn keyword_policy_is_configurable() {
    let source = SourceText::unnamed("const x : int = 1 ;");

    let lenient = analyze(&source, Options::default());
    assert_value(&lenient, 1);

    let strict = analyze(&source,
                         Options { mode:           Mode::Declaration,
                                   keyword_policy: KeywordPolicy::AllOf, });
    let texts: Vec<_> = strict.diagnostics.iter().map(|d| d.text.as_str()).collect();
    assert_eq!(texts, ["missing keyword (`val`)"]);
}

#[test]
fn evaluation_error_is_terminal() {
    let analysis = declaration("const x : int = 1 / 0 ;");
    assert!(analysis.is_clean());
    assert_eq!(analysis.outcome, Some(Err(EvalError::DivisionByZero)));
    assert!(analysis.failed());
    assert_eq!(analysis.value(), None);
}

#[test]
fn expression_mode_reports_postfix_trace() {
    let analysis = expression("2 + 3 * 4");
    assert_value(&analysis, 14);

    let Some(Ok(evaluation)) = &analysis.outcome else {
        panic!("expected an evaluation");
    };
    assert_eq!(render_postfix(&evaluation.postfix), "2 3 4 * +");
}

#[test]
fn expression_mode_syntax_errors() {
    let analysis = expression("1 + a )");
    let rows: Vec<_> = analysis.diagnostics
                               .iter()
                               .map(|d| (d.category, d.text.as_str(), d.ordinal))
                               .collect();
    assert_eq!(rows,
               vec![(Category::SyntaxError, "expected number or `(`, found `a`", 1),
                    (Category::SyntaxError, "unexpected trailing token: `)`", 2)]);
    assert!(analysis.outcome.is_none());
}

#[test]
fn file_label_is_carried_into_diagnostics() {
    let source = SourceText::new("( 1 + 2", "calc.txt");
    let analysis = analyze(&source, Options::with_mode(Mode::Expression));
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(analysis.diagnostics[0].file, "calc.txt");
    assert_eq!(analysis.diagnostics[0].to_string(),
               "E002 | syntax error | expected closing `)` | 1 | calc.txt | 1");
}

#[test]
fn runs_share_no_state() {
    let analyzer = Analyzer::new(Options::with_mode(Mode::Expression));
    let bad = SourceText::unnamed("1 + )");
    let good = SourceText::unnamed("6 * 7");

    let first = analyzer.run(&good);
    let _ = analyzer.run(&bad);
    let second = analyzer.run(&good);

    assert_eq!(first, second);
    assert_value(&second, 42);
}

#[test]
fn concurrent_runs_are_independent() {
    let analyzer = Analyzer::new(Options::with_mode(Mode::Expression));
    let inputs: Vec<(String, i64)> = (1..=8).map(|n| (format!("{n} * ( {n} + 1 )"), n * (n + 1)))
                                            .collect();

    std::thread::scope(|scope| {
        for (text, expected) in &inputs {
            scope.spawn(move || {
                     let analysis = analyzer.run(&SourceText::unnamed(text.as_str()));
                     assert_eq!(analysis.value(), Some(*expected));
                 });
        }
    });
}
