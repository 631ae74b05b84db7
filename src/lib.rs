//! fasttext-cli - fastText `predict-prob` from the command line
//!
//! Reads text from stdin, collapses its whitespace, loads a fastText model
//! and prints the top-k labels with their probabilities.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Input normalization, prediction options and results
//! - **Application**: The predict use case and the classifier port traits
//! - **Infrastructure**: The fastText adapter (cargo feature `fasttext`)
//! - **CLI**: Argument parsing, output formatting and logging

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
