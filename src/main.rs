use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser};
use stackcalc::{Evaluator, MAX_NESTING_DEPTH, TokenTable, TrailingInput, tokenize};
use tracing::level_filters::LevelFilter;

/// stackcalc evaluates an arithmetic expression and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stackcalc to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints the token table before evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Binds a variable, e.g. `-D x=2.5`. May be repeated.
    #[arg(short = 'D', long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Rejects tokens that follow a complete expression.
    #[arg(long)]
    strict: bool,

    /// Maximum nesting depth of parentheses.
    #[arg(long, default_value_t = MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// Raises log verbosity; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression, or a path to it with `--file`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn parse_binding(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{raw}'"));
    }
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.to_string(), value))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let expression = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(text) => text,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    if args.tokens {
        match tokenize(&expression) {
            Ok(tokens) => print!("{}", TokenTable::new(&tokens)),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }

    let trailing_input = if args.strict {
        TrailingInput::Reject
    } else {
        TrailingInput::Ignore
    };
    let mut evaluator = Evaluator::new().with_max_depth(args.max_depth)
                                        .with_trailing_input(trailing_input);

    match evaluator.evaluate_with(&expression, args.vars) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
