//! Shared tokenizer for the set- and vector-based metrics.
//!
//! Tokenization is implemented exactly once so the Jaccard and cosine
//! metrics are guaranteed identical token semantics. The edit-distance and
//! positional metrics never tokenize; they compare raw character sequences.

/// Extract lowercased word tokens from `input`.
///
/// A token is a maximal run of word characters — Unicode alphanumerics or
/// `_`. Everything else separates tokens. Duplicates are preserved; callers
/// that want a set collapse them.
///
/// # Examples
///
/// ```
/// use textsim_core::tokenize;
///
/// assert_eq!(tokenize("Hello, world!"), vec!["hello", "world"]);
/// assert_eq!(tokenize("foo_bar 42"), vec!["foo_bar", "42"]);
/// assert!(tokenize("!?!").is_empty());
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn underscore_joins_a_token() {
        assert_eq!(tokenize("snake_case rules"), vec!["snake_case", "rules"]);
    }

    #[test]
    fn digits_are_word_characters() {
        assert_eq!(tokenize("v2 beats v1"), vec!["v2", "beats", "v1"]);
    }

    #[test]
    fn duplicates_are_preserved_in_order() {
        assert_eq!(tokenize("the cat, the hat"), vec!["the", "cat", "the", "hat"]);
    }

    #[test]
    fn empty_and_symbol_only_inputs_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ...  !?  ").is_empty());
    }

    #[test]
    fn non_ascii_alphabetics_tokenize() {
        assert_eq!(tokenize("Grüße, Welt"), vec!["grüße", "welt"]);
    }
}
