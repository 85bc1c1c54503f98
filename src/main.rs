//! The Lumen interpreter CLI.
//!
//! With no arguments this starts an interactive REPL; with `--file
//! <path>` it lexes, parses, and evaluates a whole source file once
//! (batch mode) and prints the result.
//!
//! # Logging
//!
//! Initializes [`env_logger`] from `RUST_LOG`, falling back to the
//! legacy `LOG_LEVEL=debug` variable when `RUST_LOG` itself is unset —
//! library code below only ever logs at `trace`/`debug`, so nothing is
//! printed unless one of these is set.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser as ClapParser;

use lumen::environment::Environment;
use lumen::evaluator::eval;
use lumen::lexer::Lexer;
use lumen::object::Value;
use lumen::parser::Parser;

const PROMPT: &str = ">> ";

/// Command-line interface for the Lumen interpreter.
#[derive(ClapParser)]
#[command(name = "lumen")]
#[command(about = "The Lumen programming language", long_about = None)]
struct Cli {
    /// Run a source file non-interactively instead of starting the REPL.
    #[arg(short = 'f', long = "file")]
    file: Option<String>,
}

fn init_logging() {
    if std::env::var("RUST_LOG").is_err() && std::env::var("LOG_LEVEL").as_deref() == Ok("debug")
    {
        // SAFETY: single-threaded at this point, before any other code
        // reads the environment.
        unsafe { std::env::set_var("RUST_LOG", "debug") };
    }
    env_logger::init();
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    match cli.file {
        Some(path) => run_file(&path),
        None => {
            run_repl();
            ExitCode::SUCCESS
        }
    }
}

/// Lexes, parses, and evaluates `source` once, printing parser errors
/// (if any) or the result's `inspect()`.
///
/// Returns the evaluated [`Value`] alongside whether any parser errors
/// were reported, so callers can decide how to translate that into
/// process exit status.
fn eval_once(source: &str) -> (Value, bool) {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        for msg in parser.errors() {
            println!("\t{msg}");
        }
        return (Value::Null, true);
    }

    let env = Environment::new();
    log::debug!("evaluating program with {} statement(s)", program.statements.len());
    (eval(&program, &env), false)
}

fn run_file(path: &str) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: failed to read {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (result, had_parse_errors) = eval_once(&source);
    if had_parse_errors {
        return ExitCode::FAILURE;
    }

    println!("{}", result.inspect());
    if result.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_repl() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{PROMPT}");
        if stdout.flush().is_err() {
            return;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return, // EOF
            Ok(_) => {}
            Err(_) => return,
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() || line == "exit" {
            return;
        }

        let (result, had_parse_errors) = eval_once(line);
        if had_parse_errors {
            continue;
        }

        if !matches!(result, Value::Null) {
            println!("{}", result.inspect());
        }
    }
}
