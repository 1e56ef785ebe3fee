use serde::Serialize;

/// Separator used when a format forces tab-delimited records.
pub const TAB: &str = "\t";

/// A field name bound to a 1-based column index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnBinding {
    pub name: String,
    pub column: usize,
}

impl ColumnBinding {
    pub fn new(name: impl Into<String>, column: usize) -> Self {
        Self {
            name: name.into(),
            column,
        }
    }
}

impl std::fmt::Display for ColumnBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.column)
    }
}

/// Whitespace as C `isspace` sees it in the "C" locale.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab, and unlike
/// `char::is_whitespace` it never matches bytes of multi-byte characters.
#[must_use]
pub fn is_field_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Split `record` on runs of [`is_field_space`], ignoring leading and trailing runs.
pub fn split_field_space(record: &[u8]) -> impl Iterator<Item = &[u8]> {
    record
        .split(|b| is_field_space(*b))
        .filter(|token| !token.is_empty())
}

/// Input and output field separators.
///
/// An input separator of a single space splits on runs of whitespace, as awk
/// does by default. Anything else is matched literally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSeparators {
    pub input: String,
    pub output: String,
}

impl FieldSeparators {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    #[must_use]
    pub fn tabs() -> Self {
        Self::new(TAB, TAB)
    }

    /// Split a record into fields using the input separator
    pub fn split<'a>(&self, record: &'a [u8]) -> Vec<&'a [u8]> {
        if self.input == " " {
            split_field_space(record).collect()
        } else if record.is_empty() {
            Vec::new()
        } else {
            split_literal(record, self.input.as_bytes())
        }
    }
}

fn split_literal<'a>(record: &'a [u8], sep: &[u8]) -> Vec<&'a [u8]> {
    if sep.is_empty() {
        return vec![record];
    }

    let mut fields = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i + sep.len() <= record.len() {
        if &record[i..i + sep.len()] == sep {
            fields.push(&record[start..i]);
            i += sep.len();
            start = i;
        } else {
            i += 1;
        }
    }
    fields.push(&record[start..]);
    fields
}

impl Default for FieldSeparators {
    fn default() -> Self {
        Self::new(" ", " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split_collapses_whitespace() {
        let seps = FieldSeparators::default();
        assert_eq!(
            seps.split(b"  a \t b \x0b\x0c c \r"),
            vec![b"a".as_slice(), b"b", b"c"]
        );
        assert!(seps.split(b"   ").is_empty());
    }

    #[test]
    fn test_default_split_ignores_non_ascii_space() {
        let seps = FieldSeparators::default();
        let record = "col\u{a0}a b".as_bytes();
        assert_eq!(
            seps.split(record),
            vec!["col\u{a0}a".as_bytes(), b"b".as_slice()]
        );
    }

    #[test]
    fn test_tab_split_keeps_empty_fields() {
        let seps = FieldSeparators::tabs();
        assert_eq!(seps.split(b"a\t\tc"), vec![b"a".as_slice(), b"", b"c"]);
        assert_eq!(seps.split(b"a b\tc"), vec![b"a b".as_slice(), b"c"]);
        assert_eq!(seps.split(b"a\t"), vec![b"a".as_slice(), b""]);
        assert!(seps.split(b"").is_empty());
    }

    #[test]
    fn test_multi_byte_separator() {
        let seps = FieldSeparators::new("::", " ");
        assert_eq!(
            seps.split(b"a::b:c::"),
            vec![b"a".as_slice(), b"b:c", b""]
        );
    }

    #[test]
    fn test_split_keeps_invalid_utf8() {
        let seps = FieldSeparators::tabs();
        assert_eq!(
            seps.split(b"caf\xE9\tx"),
            vec![b"caf\xE9".as_slice(), b"x"]
        );
    }

    #[test]
    fn test_is_field_space() {
        for b in [b' ', b'\t', b'\n', b'\x0b', b'\x0c', b'\r'] {
            assert!(is_field_space(b));
        }
        for b in [b'a', b'0', 0xA0, 0xC2, 0x85] {
            assert!(!is_field_space(b));
        }
    }

    #[test]
    fn test_binding_display() {
        assert_eq!(ColumnBinding::new("chrom", 1).to_string(), "chrom=1");
    }
}
