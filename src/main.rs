use std::{
    fs,
    io,
    process::ExitCode,
};

use clap::Parser;
use foldcalc::{
    evaluate,
    repl::{self, DEFAULT_PROMPT, Options},
    tokenize,
};

/// foldcalc evaluates flat arithmetic expressions strictly left to right.
///
/// Without arguments it starts an interactive prompt on standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells foldcalc to read a file of expressions, one per line, instead of
    /// a single expression.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Print the tokens of every line to standard error before evaluating it.
    #[arg(short, long)]
    tokens: bool,

    /// Prompt shown in interactive mode.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// An expression to evaluate, or a path when `--file` is given.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.contents {
        Some(path) if args.file => {
            let script = match fs::read_to_string(&path) {
                Ok(script) => script,
                Err(_) => {
                    eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                    return ExitCode::FAILURE;
                },
            };
            let options = Options { prompt:       None,
                                    trace_tokens: args.tokens, };
            run_loop(script.as_bytes(), &options)
        },
        Some(expression) => {
            if args.tokens {
                match tokenize(&expression) {
                    Ok(tokens) => tokens.iter().for_each(|t| eprintln!("{t}")),
                    Err(e) => eprintln!("{e}"),
                }
            }
            match evaluate(&expression) {
                Ok(value) => {
                    println!("{expression} = {value}");
                    ExitCode::SUCCESS
                },
                Err(e) => {
                    eprintln!("{e}");
                    ExitCode::FAILURE
                },
            }
        },
        None => {
            let options = Options { prompt:       Some(args.prompt),
                                    trace_tokens: args.tokens, };
            run_loop(io::stdin().lock(), &options)
        },
    }
}

fn run_loop<R: io::BufRead>(input: R, options: &Options) -> ExitCode {
    match repl::run(input, io::stdout().lock(), io::stderr().lock(), options) {
        Ok(summary) if summary.failed == 0 || options.prompt.is_some() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
