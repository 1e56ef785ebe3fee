//! Selecting fields by name or position.

use crate::binding::header::is_whole_number;
use crate::core::error::ColumnError;
use crate::core::types::FieldSeparators;
use crate::host::symbols::SymbolTable;

/// A single requested field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRef {
    /// 1-based column, used as given
    Column(usize),
    /// Name resolved through the symbol table
    Name(String),
}

impl FieldRef {
    /// Parse one reference. All-digit text is a column, anything else a name.
    ///
    /// # Errors
    ///
    /// Returns `ColumnError::InvalidFieldReference` for empty text or column 0.
    pub fn parse(text: &str) -> Result<Self, ColumnError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ColumnError::InvalidFieldReference(text.to_string()));
        }
        if is_whole_number(text.as_bytes()) {
            return match text.parse::<usize>() {
                Ok(column) if column > 0 => Ok(FieldRef::Column(column)),
                _ => Err(ColumnError::InvalidFieldReference(text.to_string())),
            };
        }
        Ok(FieldRef::Name(text.to_string()))
    }

    fn resolve(&self, symbols: &SymbolTable) -> Result<usize, ColumnError> {
        match self {
            FieldRef::Column(column) => Ok(*column),
            FieldRef::Name(name) => symbols
                .column(name)
                .ok_or_else(|| ColumnError::UnboundName(name.clone())),
        }
    }
}

/// An ordered list of requested fields. Empty means the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    fields: Vec<FieldRef>,
}

impl Projection {
    /// Parse a comma-separated field list such as `chrom,3,end`.
    ///
    /// # Errors
    ///
    /// Returns `ColumnError::InvalidFieldReference` if any entry is invalid.
    pub fn parse(list: &str) -> Result<Self, ColumnError> {
        if list.trim().is_empty() {
            return Ok(Self::default());
        }
        let fields = list
            .split(',')
            .map(FieldRef::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fields })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolve names to columns against the current bindings.
    ///
    /// # Errors
    ///
    /// Returns `ColumnError::UnboundName` for a name with no numeric binding.
    pub fn resolve(&self, symbols: &SymbolTable) -> Result<Vec<usize>, ColumnError> {
        self.fields.iter().map(|f| f.resolve(symbols)).collect()
    }
}

/// Build the output record from resolved columns. Missing fields are empty.
///
/// Field bytes are copied as they are; nothing is decoded.
#[must_use]
pub fn project(record: &[u8], columns: &[usize], separators: &FieldSeparators) -> Vec<u8> {
    if columns.is_empty() {
        return record.to_vec();
    }
    let fields = separators.split(record);
    columns
        .iter()
        .map(|&column| fields.get(column - 1).copied().unwrap_or_default())
        .collect::<Vec<&[u8]>>()
        .join(separators.output.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_list() {
        let projection = Projection::parse("chrom, 3 ,end").unwrap();
        assert_eq!(
            projection.fields,
            vec![
                FieldRef::Name("chrom".to_string()),
                FieldRef::Column(3),
                FieldRef::Name("end".to_string()),
            ]
        );
        assert!(Projection::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_references() {
        assert!(matches!(
            Projection::parse("a,,b"),
            Err(ColumnError::InvalidFieldReference(_))
        ));
        assert!(matches!(
            FieldRef::parse("0"),
            Err(ColumnError::InvalidFieldReference(_))
        ));
    }

    #[test]
    fn test_resolve_names() {
        let mut symbols = SymbolTable::new();
        symbols.bind("end", 3);
        symbols.set_str("label", "x");

        let projection = Projection::parse("end,1").unwrap();
        assert_eq!(projection.resolve(&symbols).unwrap(), vec![3, 1]);

        let err = Projection::parse("label").unwrap().resolve(&symbols);
        assert!(matches!(err, Err(ColumnError::UnboundName(name)) if name == "label"));
        assert!(Projection::parse("missing")
            .unwrap()
            .resolve(&symbols)
            .is_err());
    }

    #[test]
    fn test_project() {
        let tabs = FieldSeparators::tabs();
        assert_eq!(project(b"a\tb\tc", &[3, 1], &tabs), b"c\ta");
        assert_eq!(project(b"a\tb", &[2, 5], &tabs), b"b\t");
        assert_eq!(project(b"a b", &[], &tabs), b"a b");

        let spaces = FieldSeparators::new(" ", ",");
        assert_eq!(project(b"  x   y ", &[2, 1], &spaces), b"y,x");
    }

    #[test]
    fn test_project_copies_invalid_utf8_fields() {
        let tabs = FieldSeparators::tabs();
        assert_eq!(project(b"caf\xE9\t1\t\xFF", &[3, 1], &tabs), b"\xFF\tcaf\xE9");
        assert_eq!(project(b"\xC0\xC1", &[], &tabs), b"\xC0\xC1");
    }
}
