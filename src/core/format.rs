//! The registry of record formats that carry column names.
//!
//! Every identifier a user may request is listed here, in the order it is
//! presented on error paths and by `colnames formats`. Fixed formats also carry
//! their column layout, delimiter policy and header marker.

use serde::Serialize;
use std::str::FromStr;

use crate::core::error::ColumnError;

/// Identifiers accepted by [`RecordFormat::from_str`], in declaration order.
pub const VALID_FORMATS: &[&str] = &["header", "bed", "bedgraph", "sam", "vcf", "gff", "gtf"];

const BED_COLUMNS: &[(&str, usize)] = &[
    ("chrom", 1),
    ("start", 2),
    ("end", 3),
    ("name", 4),
    ("score", 5),
    ("strand", 6),
];

const BEDGRAPH_COLUMNS: &[(&str, usize)] = &[("chrom", 1), ("start", 2), ("end", 3), ("score", 4)];

const SAM_COLUMNS: &[(&str, usize)] = &[
    ("qname", 1),
    ("flag", 2),
    ("rname", 3),
    ("pos", 4),
    ("mapq", 5),
    ("cigar", 6),
    ("rnext", 7),
    ("pnext", 8),
    ("tlen", 9),
    ("seq", 10),
    ("qual", 11),
];

const VCF_COLUMNS: &[(&str, usize)] = &[
    ("chrom", 1),
    ("pos", 2),
    ("id", 3),
    ("ref", 4),
    ("alt", 5),
    ("qual", 6),
    ("filter", 7),
    ("info", 8),
];

// `group` and `attribute` intentionally alias column 9.
const GFF_COLUMNS: &[(&str, usize)] = &[
    ("seqname", 1),
    ("source", 2),
    ("feature", 3),
    ("start", 4),
    ("end", 5),
    ("score", 6),
    ("filter", 7),
    ("strand", 8),
    ("group", 9),
    ("attribute", 9),
];

/// A validated record format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// Column names come from the first record, split on whitespace
    Header,
    /// BED (first six columns)
    Bed,
    /// bedGraph
    BedGraph,
    /// SAM alignment records
    Sam,
    /// VCF variant records
    Vcf,
    /// GFF feature records
    Gff,
    /// GTF feature records, laid out as GFF
    Gtf,
}

impl RecordFormat {
    /// All formats in declaration order.
    pub const ALL: [RecordFormat; 7] = [
        RecordFormat::Header,
        RecordFormat::Bed,
        RecordFormat::BedGraph,
        RecordFormat::Sam,
        RecordFormat::Vcf,
        RecordFormat::Gff,
        RecordFormat::Gtf,
    ];

    /// The identifier this format is requested by.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RecordFormat::Header => "header",
            RecordFormat::Bed => "bed",
            RecordFormat::BedGraph => "bedgraph",
            RecordFormat::Sam => "sam",
            RecordFormat::Vcf => "vcf",
            RecordFormat::Gff => "gff",
            RecordFormat::Gtf => "gtf",
        }
    }

    /// Fixed column layout. Empty for [`RecordFormat::Header`], whose names are
    /// only known once the first record has been read.
    #[must_use]
    pub fn columns(self) -> &'static [(&'static str, usize)] {
        match self {
            RecordFormat::Header => &[],
            RecordFormat::Bed => BED_COLUMNS,
            RecordFormat::BedGraph => BEDGRAPH_COLUMNS,
            RecordFormat::Sam => SAM_COLUMNS,
            RecordFormat::Vcf => VCF_COLUMNS,
            RecordFormat::Gff | RecordFormat::Gtf => GFF_COLUMNS,
        }
    }

    /// First byte of the header lines drained before data records.
    #[must_use]
    pub fn header_marker(self) -> Option<u8> {
        match self {
            RecordFormat::Sam => Some(b'@'),
            RecordFormat::Vcf | RecordFormat::Gff | RecordFormat::Gtf => Some(b'#'),
            RecordFormat::Header | RecordFormat::Bed | RecordFormat::BedGraph => None,
        }
    }

    /// Whether binding this format forces tab input and output separators.
    #[must_use]
    pub fn forces_tabs(self) -> bool {
        !matches!(self, RecordFormat::Header)
    }
}

impl std::fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordFormat {
    type Err = ColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ColumnError::UnknownFormat {
                requested: s.to_string(),
                valid: valid_formats().join(", "),
            })
    }
}

/// Check whether `request` names a known format. Matching is case-sensitive.
///
/// # Examples
///
/// ```
/// use colnames::core::format::is_valid_format;
///
/// assert!(is_valid_format("bedgraph"));
/// assert!(!is_valid_format("BED"));
/// assert!(!is_valid_format(""));
/// ```
#[must_use]
pub fn is_valid_format(request: &str) -> bool {
    VALID_FORMATS.contains(&request)
}

/// The valid identifiers, in the order they should be shown to the operator.
#[must_use]
pub fn valid_formats() -> &'static [&'static str] {
    VALID_FORMATS
}
