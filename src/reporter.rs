use std::io::{self, Stderr, Write};

use crate::scanner::ScanningError;

/// Sink for diagnostics. Reporting never stops a scan.
pub trait ErrorReporter {
    fn report(&mut self, line: usize, message: &str);

    fn report_scanning_error(&mut self, error: &ScanningError) {
        self.report(error.line(), &error.to_string())
    }
}

/// Writes `[line N] Error: message` lines and remembers whether anything was reported.
pub struct ConsoleReporter<W: Write> {
    out: W,
    had_error: bool,
}

impl ConsoleReporter<Stderr> {
    pub fn stderr() -> ConsoleReporter<Stderr> {
        ConsoleReporter::new(io::stderr())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> ConsoleReporter<W> {
        ConsoleReporter {
            out,
            had_error: false,
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// The prompt keeps going after a bad entry, so it clears the flag between entries.
    pub fn reset(&mut self) {
        self.had_error = false;
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ErrorReporter for ConsoleReporter<W> {
    fn report(&mut self, line: usize, message: &str) {
        self.had_error = true;
        // nowhere left to report a failing diagnostics sink
        let _ = writeln!(self.out, "[line {line}] Error: {message}");
    }
}
