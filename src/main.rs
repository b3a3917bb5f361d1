use std::{fs, process::ExitCode};

use clap::Parser;
use poliz::{
    analyze,
    analyzer::{
        compiler::render_postfix,
        core::{Analysis, Mode, Options, SourceText},
        validator::KeywordPolicy,
    },
};

/// poliz checks a single declaration or arithmetic expression, reports
/// invalid characters and errors, and evaluates it when it is clean.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells poliz to read a file instead of taking the text inline.
    #[arg(short, long)]
    file: bool,

    /// What kind of text to analyze.
    #[arg(short, long, value_enum, default_value_t = Mode::Declaration)]
    mode: Mode,

    /// Report every missing keyword, not only when none of them is present.
    #[arg(short, long)]
    all_keywords: bool,

    /// Log each pipeline stage to stderr.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    let source = if args.file {
        let Ok(text) = fs::read_to_string(&args.contents) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            return ExitCode::FAILURE;
        };
        SourceText::new(text.trim_end(), &args.contents)
    } else {
        SourceText::unnamed(args.contents.trim_end())
    };

    let keyword_policy = if args.all_keywords { KeywordPolicy::AllOf } else { KeywordPolicy::AnyOf };
    let analysis = analyze(&source,
                           Options { mode: args.mode,
                                     keyword_policy });

    report(&analysis);

    if analysis.failed() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Prints the diagnostics table, or the result of a clean run.
fn report(analysis: &Analysis) {
    if !analysis.is_clean() {
        println!("code | category | text | # | file | line");
        for diagnostic in &analysis.diagnostics {
            println!("{diagnostic}");
        }
        return;
    }

    println!("No errors found.");
    match &analysis.outcome {
        Some(Ok(evaluation)) => {
            if analysis.mode == Mode::Expression {
                println!("Postfix: {}", render_postfix(&evaluation.postfix));
            }
            println!("Result: {}", evaluation.value);
        },
        Some(Err(e)) => eprintln!("Evaluation error: {e}"),
        None => {},
    }
}
