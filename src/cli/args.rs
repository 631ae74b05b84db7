//! CLI argument definitions using Clap
//!
//! Only the options before the command are parsed by clap. Everything from
//! the command name on is taken verbatim and split by position, so values
//! such as `-`, `--help` or `-v` reach the positional slots untouched.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::domain::TopK;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "FASTTEXT_LOG";

/// The only supported command
pub const PREDICT_PROB: &str = "predict-prob";

/// One-line usage shown on any argument error
pub const USAGE: &str = "Usage: fasttext predict-prob <model> - [k]";

/// fastText predict-prob - classify text read from stdin
#[derive(Parser, Debug)]
#[command(name = "fasttext")]
#[command(version)]
#[command(about = "Print the top-k fastText labels and probabilities for text read from stdin")]
#[command(long_about = None)]
#[command(override_usage = "fasttext [OPTIONS] predict-prob <model> <input> [k]")]
#[command(after_help = "Arguments of predict-prob:\n  \
    <model>  Path to the fastText model (.bin or .ftz)\n  \
    <input>  Input placeholder, conventionally \"-\"; text is always read from stdin\n  \
    [k]      Number of labels to print (falls back to 1 when not an integer)")]
#[command(subcommand_required = true)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Log filter directive (e.g. "debug", "fasttext_cli=trace")
    #[arg(long, value_name = "FILTER", env = LOG_ENV, hide_env_values = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Command name followed by its arguments, exactly as given
    #[command(external_subcommand)]
    Raw(Vec<OsString>),
}

impl Commands {
    /// The raw command line starting at the command name
    pub fn raw_args(&self) -> &[OsString] {
        match self {
            Commands::Raw(args) => args,
        }
    }
}

/// Invocation does not match `predict-prob <model> <input> [k]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", USAGE)]
pub struct UsageError;

/// Resolved predict-prob options
#[derive(Debug, Clone, PartialEq)]
pub struct PredictOptions {
    pub model_path: PathBuf,
    pub k: TopK,
}

impl PredictOptions {
    /// Split a raw command line (command name first) by position.
    ///
    /// Requires the `predict-prob` command, a model path and an input
    /// placeholder. The placeholder's value is never inspected. A 4th value
    /// that is not an integer, or not valid UTF-8, leaves k at 1. Anything
    /// after the 4th value is ignored.
    pub fn from_raw(raw: &[OsString]) -> Result<Self, UsageError> {
        match raw {
            [command, model, _input, rest @ ..] if command == PREDICT_PROB => {
                Ok(Self {
                    model_path: PathBuf::from(model),
                    k: TopK::parse_lenient(rest.first().and_then(|k| k.to_str())),
                })
            }
            _ => Err(UsageError),
        }
    }
}

impl TryFrom<&Cli> for PredictOptions {
    type Error = UsageError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        Self::from_raw(cli.command.raw_args())
    }
}
