//! CLI presenter for output formatting

use std::io::{self, Write};

use colored::*;

use crate::domain::Prediction;

/// Presenter for CLI output formatting
///
/// Predictions go to the given writer (stdout in the binary); usage and
/// error lines always go to stderr.
pub struct Presenter<W: Write> {
    out: W,
}

impl Presenter<io::Stdout> {
    /// Create a presenter writing predictions to stdout
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for Presenter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Presenter<W> {
    /// Create a presenter writing predictions to `out`
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    /// Write one `<label> <probability>` line per prediction, then flush
    pub fn predictions(&mut self, predictions: &[Prediction]) -> io::Result<()> {
        for prediction in predictions {
            writeln!(self.out, "{}", prediction)?;
        }
        self.out.flush()
    }

    /// Print the usage line to stderr
    pub fn usage(&self, usage: &str) {
        eprintln!("{}", usage);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Consume the presenter, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
