use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::cli::parse_record_format;
use crate::core::format::RecordFormat;
use crate::core::types::FieldSeparators;
use crate::host::input::open_input;
use crate::host::projection::Projection;
use crate::host::Host;

#[derive(Args)]
pub struct CutArgs {
    /// Record format whose column names to bind
    #[arg(short = 'c', long = "column-format", value_parser = parse_record_format)]
    pub column_format: Option<RecordFormat>,

    /// Comma-separated names or 1-based column numbers (all fields if omitted)
    #[arg(short, long)]
    pub fields: Option<String>,

    /// Input field separator; a single space splits on runs of whitespace
    #[arg(short = 'F', long, default_value = " ")]
    pub field_separator: String,

    /// Output field separator
    #[arg(long, default_value = " ")]
    pub ofs: String,

    /// Input file, plain or gzip-compressed (use '-' for stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

/// Execute cut subcommand
///
/// # Errors
///
/// Returns an error if the field list is invalid, names an unbound column,
/// or the input cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CutArgs, verbose: bool) -> anyhow::Result<()> {
    let projection = Projection::parse(args.fields.as_deref().unwrap_or_default())?;
    let separators = FieldSeparators::new(
        unescape(&args.field_separator),
        unescape(&args.ofs),
    );

    let reader = open_input(&args.input)?;
    let stdout = std::io::stdout();
    let writer = BufWriter::new(stdout.lock());

    let mut host = Host::new(reader, writer).with_separators(separators);
    let summary = host.run(args.column_format, &projection)?;
    host.into_writer().flush()?;

    if verbose {
        eprintln!(
            "Processed {} records ({} header records passed through)",
            summary.records, summary.drained
        );
    }

    Ok(())
}

/// Expand the `\t` and `\\` escapes so separators can be typed in a shell
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r"\t"), "\t");
        assert_eq!(unescape(r"a\\b"), r"a\b");
        assert_eq!(unescape(r"\n"), r"\n");
        assert_eq!(unescape(","), ",");
        assert_eq!(unescape("\\"), "\\");
    }
}
