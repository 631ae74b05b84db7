//! fasttext CLI entry point

use std::process::ExitCode;

fn main() -> ExitCode {
    fasttext_cli::cli::run(std::env::args_os())
}
