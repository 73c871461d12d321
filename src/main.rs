//! word-pipeline: split, reverse and render the words of a message
//!
//! Thin binary wrapper; all behaviour lives in the library crate.

use std::process::ExitCode;

fn main() -> ExitCode {
    word_pipeline::cli::run()
}
