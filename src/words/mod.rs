//! Word splitting, joining and reordering

use crate::domain::ProcessingResult;

pub mod stats;

pub use stats::WordStats;

const SEPARATOR: &str = ", ";

/// Split text on runs of whitespace, dropping empty tokens.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Join words with `", "`. An empty slice joins to the empty string.
pub fn join_with_commas<S: AsRef<str>>(words: &[S]) -> String {
    words.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(SEPARATOR)
}

/// Reverse the word order of `text`, rejoining with `", "`.
///
/// The result is comma-joined, so feeding it back through [`split_words`]
/// yields tokens with trailing commas rather than the original words.
pub fn reverse_words(text: &str) -> String {
    let mut words = split_words(text);
    words.reverse();
    join_with_commas(words.as_slice())
}

/// Run a message through the pipeline: optionally reverse, then split.
pub fn process_message(message: &str, reverse: bool) -> ProcessingResult {
    if reverse {
        let reversed = reverse_words(message);
        tracing::debug!(original = message, reversed = %reversed, "Reversed message words");
        ProcessingResult::new(reversed)
    } else {
        ProcessingResult::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_empty_tokens_and_keeps_order() {
        assert_eq!(split_words("  alpha\tbeta \n gamma  "), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn split_empty_and_whitespace_only() {
        assert!(split_words("").is_empty());
        assert!(split_words(" \t\r\n ").is_empty());
    }

    #[test]
    fn join_uses_comma_space_without_trailing_separator() {
        assert_eq!(join_with_commas(&["a", "b", "c"]), "a, b, c");
        assert_eq!(join_with_commas(&["solo"]), "solo");
        assert_eq!(join_with_commas::<&str>(&[]), "");
    }

    #[test]
    fn join_then_resplit_on_separator_round_trips_without_commas() {
        let words = split_words("the quick  brown fox");
        let joined = join_with_commas(words.as_slice());
        let resplit: Vec<&str> = joined.split(", ").collect();
        assert_eq!(resplit, words);
    }

    #[test]
    fn reverse_joins_with_commas() {
        assert_eq!(reverse_words("a b c"), "c, b, a");
    }

    #[test]
    fn reverse_of_zero_or_one_word_is_unchanged() {
        assert_eq!(reverse_words(""), "");
        assert_eq!(reverse_words("   "), "");
        assert_eq!(reverse_words("single"), "single");
        assert_eq!(reverse_words("  single  "), "single");
    }

    #[test]
    fn reverse_is_not_an_involution() {
        let once = reverse_words("one two three");
        let twice = reverse_words(&once);
        assert_eq!(once, "three, two, one");
        assert_eq!(twice, "one, two,, three,");
        assert_ne!(twice, "one two three");
    }

    #[test]
    fn process_without_reverse_splits_message() {
        let result = process_message("a b c", false);
        assert_eq!(result.message(), "a b c");
        assert_eq!(result.words(), ["a", "b", "c"]);
        assert_eq!(result.word_count(), 3);
    }

    #[test]
    fn process_with_reverse_resplits_comma_joined_text() {
        let result = process_message("a b c", true);
        assert_eq!(result.message(), "c, b, a");
        assert_eq!(result.words(), ["c,", "b,", "a"]);
        assert_eq!(result.word_count(), 3);
    }
}
