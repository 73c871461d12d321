//! Word length statistics

use serde::Serialize;

/// Character-length statistics over a list of words.
///
/// Lengths count Unicode scalar values, not bytes. All fields are zero for an
/// empty list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordStats {
    pub mean_length: f64,
    pub max_length: usize,
    pub min_length: usize,
}

impl WordStats {
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let lengths: Vec<usize> = words.iter().map(|w| w.as_ref().chars().count()).collect();
        if lengths.is_empty() {
            return Self::default();
        }

        let total: usize = lengths.iter().sum();
        Self {
            mean_length: total as f64 / lengths.len() as f64,
            max_length: lengths.iter().copied().max().unwrap_or(0),
            min_length: lengths.iter().copied().min().unwrap_or(0),
        }
    }
}
