//! # colnames
//!
//! Refer to the columns of tabular bioinformatics records by name.
//!
//! Awk-style tools address fields by position (`$3`). `colnames` binds names
//! to those positions instead, either from a fixed layout for a known format
//! or from the first line of a whitespace-separated table.
//!
//! ## Features
//!
//! - **Fixed layouts**: BED, bedGraph, SAM, VCF and GFF/GTF column names
//! - **Header mode**: names taken from the first record, skipping bare numbers
//! - **Tab policy**: fixed formats switch both field separators to tab
//! - **Header pass-through**: `@` (SAM) and `#` (VCF/GFF/GTF) lines are copied
//!   to the output before data records
//! - **Gzip input**: detected by content, not by extension
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use colnames::{Host, Projection, RecordFormat};
//!
//! let vcf = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\nchr1\t100\t.\tA\tG\n";
//! let mut host = Host::new(Cursor::new(vcf), Vec::new());
//!
//! let fields = Projection::parse("chrom,alt").unwrap();
//! let summary = host.run(Some(RecordFormat::Vcf), &fields).unwrap();
//!
//! assert_eq!(summary.drained, 2);
//! assert!(host.writer().ends_with(b"chr1\tG\n"));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Format registry and shared types
//! - [`binding`]: The column binder and its [`Environment`] contract
//! - [`host`]: Symbol table, record reader and the field projection loop
//! - [`cli`]: Command-line interface implementation

pub mod binding;
pub mod cli;
pub mod core;
pub mod host;

// Re-export commonly used types for convenience
pub use binding::{apply_format, BindSummary, Environment};
pub use core::error::ColumnError;
pub use core::format::{is_valid_format, valid_formats, RecordFormat};
pub use core::types::{ColumnBinding, FieldSeparators};
pub use host::projection::Projection;
pub use host::symbols::SymbolTable;
pub use host::{Host, RunSummary};
