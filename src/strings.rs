use std::sync::LazyLock;

use regex::Regex;

static ESCAPED_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([\\*_{}\[\]()#+\-.!])").unwrap());

/// Resolves backslash-escaped punctuation to the literal character,
/// dropping the backslash. Runs once, before any other interpretation;
/// backslashes not followed by an escapable character are left alone.
pub(crate) fn unescape_punctuation(text: &str) -> String {
    ESCAPED_PUNCTUATION.replace_all(text, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::unescape_punctuation;

    #[test]
    fn drops_backslash_before_punctuation() {
        assert_eq!(unescape_punctuation(r"\*asterisks\*"), "*asterisks*");
        assert_eq!(unescape_punctuation(r"\# heading"), "# heading");
        assert_eq!(unescape_punctuation(r"\\"), r"\");
    }

    #[test]
    fn untouched_without_escapable_punctuation() {
        assert_eq!(unescape_punctuation("plain text"), "plain text");
        assert_eq!(unescape_punctuation(r"a \q b"), r"a \q b");
    }

    #[test]
    fn double_backslash_shields_the_next_escape() {
        assert_eq!(unescape_punctuation(r"\\*"), r"\*");
    }
}
