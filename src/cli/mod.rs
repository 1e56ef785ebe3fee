//! Command-line interface for colnames.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **formats**: List the recognised formats and their column layouts
//! - **bindings**: Show the column names a format binds
//! - **cut**: Print selected columns of each record, by name or position
//!
//! ## Usage
//!
//! ```text
//! # Column names of every format
//! colnames formats
//!
//! # Names taken from the first line of a table
//! colnames bindings -c header table.txt
//!
//! # Select SAM columns by name, keeping the @ header
//! samtools view -h sample.bam | colnames cut -c sam -f qname,rname,pos -
//!
//! # Named columns from a gzipped VCF
//! colnames cut -c vcf -f chrom,pos,alt calls.vcf.gz
//! ```

use clap::{Parser, Subcommand};

use crate::core::format::RecordFormat;

pub mod bindings;
pub mod cut;
pub mod formats;

#[derive(Parser)]
#[command(name = "colnames")]
#[command(version)]
#[command(about = "Refer to columns of tabular bioinformatics records by name")]
#[command(
    long_about = "colnames binds human-readable names to the columns of BED, bedGraph, SAM, VCF and GFF/GTF records, or to the names on the first line of any whitespace-separated table.\n\nFixed formats switch to tab-separated fields and pass their header lines (@ for SAM, # for VCF/GFF/GTF) straight through to the output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for listings
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the recognised record formats
    Formats,

    /// Show the column names bound for a format
    Bindings(bindings::BindingsArgs),

    /// Print selected columns of every record
    Cut(cut::CutArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Parse and validate a `-c` argument. Unknown identifiers are rejected here,
/// before any input is opened, with the list of valid ones.
///
/// # Errors
///
/// Returns the `UnknownFormat` message if `s` is not a recognised format.
pub fn parse_record_format(s: &str) -> Result<RecordFormat, String> {
    s.parse::<RecordFormat>().map_err(|e| e.to_string())
}
