//! word-pipeline: split, reverse and render the words of a message
//!
//! Loads a small `key=value` config from a fallback chain of locations, runs a
//! message through the word helpers, and renders the result as text, JSON or YAML.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod utils;
pub mod words;
