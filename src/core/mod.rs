//! Core types shared by the binder and the host.
//!
//! - [`RecordFormat`](format::RecordFormat): the closed set of formats that carry column names
//! - [`ColumnBinding`](types::ColumnBinding): a field name bound to a 1-based column
//! - [`FieldSeparators`](types::FieldSeparators): the active input/output delimiters
//! - [`ColumnError`](error::ColumnError): everything that can go wrong
//!
//! ## Fixed layouts
//!
//! | Format | Columns | Separators | Header marker |
//! |--------|---------|------------|---------------|
//! | header | first record | unchanged | none |
//! | bed | 6 | tab | none |
//! | bedgraph | 4 | tab | none |
//! | sam | 11 | tab | `@` |
//! | vcf | 8 | tab | `#` |
//! | gff/gtf | 9 (`group` = `attribute`) | tab | `#` |

pub mod error;
pub mod format;
pub mod types;
