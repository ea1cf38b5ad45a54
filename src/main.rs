use std::env;
use std::fs::read_to_string;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::exit;

use thiserror::Error;

use lox_scanner::repl::MultilineInput;
use lox_scanner::{tokenize, ConsoleReporter, ErrorReporter};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("file does not seem to exist {0}")]
    FileDoesNotExist(String),
}

fn main() -> Result<(), color_eyre::eyre::Error> {
    color_eyre::install()?;

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        println!("Usage: lox-scan [script]");
        exit(64);
    }
    if args.len() == 2 {
        let had_error = run_file(&args[1])?;
        if had_error {
            exit(65);
        }
    } else {
        run_prompt()?;
    }
    Ok(())
}

/// Returns whether any scanning error was reported.
fn run_file(path_string: &str) -> Result<bool, CliError> {
    let path = Path::new(path_string);
    if !path.try_exists()? {
        return Err(CliError::FileDoesNotExist(path_string.to_string()));
    }
    let source = read_to_string(path)?;
    let mut reporter = ConsoleReporter::stderr();
    run(&source, &mut reporter)?;
    Ok(reporter.had_error())
}

fn run_prompt() -> Result<(), CliError> {
    fn prompt() -> io::Result<()> {
        print!("> ");
        io::stdout().flush()
    }

    let mut reporter = ConsoleReporter::stderr();
    prompt()?;
    for entry in MultilineInput::new(io::stdin().lock().lines()) {
        run(&entry?, &mut reporter)?;
        // a bad entry should not poison the next one
        reporter.reset();
        prompt()?;
    }
    Ok(())
}

fn run(source: &str, reporter: &mut impl ErrorReporter) -> io::Result<()> {
    let tokens = tokenize(source, |err| reporter.report_scanning_error(&err));
    let mut stdout = io::stdout().lock();
    for token in tokens {
        writeln!(stdout, "{token}")?;
    }
    Ok(())
}
