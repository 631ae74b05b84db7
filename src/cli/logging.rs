//! Diagnostic logging setup
//!
//! Logs go to stderr and are off unless `--verbose` or a filter directive
//! (flag or `FASTTEXT_LOG`) asks for them.

use tracing_subscriber::EnvFilter;

/// Filter used by `--verbose`
const VERBOSE_FILTER: &str = "fasttext_cli=debug";

/// Build the filter for the given flags.
///
/// An explicit directive wins over `--verbose`. An unparsable directive
/// disables logging rather than failing the run.
pub fn build_filter(verbose: bool, directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(directive) => {
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("off"))
        }
        None if verbose => EnvFilter::new(VERBOSE_FILTER),
        None => EnvFilter::new("off"),
    }
}

/// Install the global stderr subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool, directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
