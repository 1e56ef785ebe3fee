//! Column names taken from a free-form header record.
//!
//! The header is split on runs of ASCII whitespace (the C `isspace` set).
//! Tokens made only of decimal digits are not names, but they still occupy a
//! column. Names are decoded lossily; the record itself is never modified.

use std::borrow::Cow;

use crate::core::types::split_field_space;

/// Yield `(name, column)` for every usable name in `record`.
///
/// # Examples
///
/// ```
/// use colnames::binding::header::column_names;
///
/// let names: Vec<(String, usize)> = column_names(b"name 2 age")
///     .map(|(name, column)| (name.into_owned(), column))
///     .collect();
/// assert_eq!(names, vec![("name".to_string(), 1), ("age".to_string(), 3)]);
/// ```
pub fn column_names(record: &[u8]) -> impl Iterator<Item = (Cow<'_, str>, usize)> {
    split_field_space(record)
        .enumerate()
        .map(|(i, token)| (token, i + 1))
        .filter(|(token, _)| !is_whole_number(token))
        .map(|(token, column)| (String::from_utf8_lossy(token), column))
}

/// True if every byte is an ASCII decimal digit.
#[must_use]
pub fn is_whole_number(token: &[u8]) -> bool {
    !token.is_empty() && token.iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(record: &[u8]) -> Vec<(String, usize)> {
        column_names(record)
            .map(|(name, column)| (name.into_owned(), column))
            .collect()
    }

    fn expected(pairs: &[(&str, usize)]) -> Vec<(String, usize)> {
        pairs.iter().map(|(n, c)| ((*n).to_string(), *c)).collect()
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            names(b"  chrom start   end "),
            expected(&[("chrom", 1), ("start", 2), ("end", 3)])
        );
    }

    #[test]
    fn test_tabs_and_mixed_whitespace() {
        assert_eq!(
            names(b"a\tb \t c\x0bd\x0ce\r"),
            expected(&[("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)])
        );
    }

    #[test]
    fn test_non_breaking_space_is_part_of_a_name() {
        assert_eq!(
            names("col\u{a0}a b".as_bytes()),
            expected(&[("col\u{a0}a", 1), ("b", 2)])
        );
    }

    #[test]
    fn test_invalid_utf8_name_is_decoded_lossily() {
        assert_eq!(
            names(b"caf\xE9 x"),
            expected(&[("caf\u{fffd}", 1), ("x", 2)])
        );
    }

    #[test]
    fn test_numeric_tokens_keep_their_column() {
        assert_eq!(names(b"1 x 22 y"), expected(&[("x", 2), ("y", 4)]));
    }

    #[test]
    fn test_empty_and_all_numeric_headers() {
        assert!(names(b"").is_empty());
        assert!(names(b" \t ").is_empty());
        assert!(names(b"1 2 3").is_empty());
    }

    #[test]
    fn test_is_whole_number() {
        assert!(is_whole_number(b"0"));
        assert!(is_whole_number(b"0042"));
        assert!(!is_whole_number(b""));
        assert!(!is_whole_number(b"-1"));
        assert!(!is_whole_number(b"1.5"));
        assert!(!is_whole_number(b"1e3"));
        assert!(!is_whole_number(b"x1"));
        assert!(!is_whole_number("١٢".as_bytes()));
    }
}
