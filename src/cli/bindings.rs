use std::io::BufRead;
use std::path::PathBuf;

use clap::Args;

use crate::binding::{apply_format, BindSummary, Environment};
use crate::cli::{parse_record_format, OutputFormat};
use crate::core::format::RecordFormat;
use crate::host::input::open_input;
use crate::host::Host;

#[derive(Args)]
pub struct BindingsArgs {
    /// Record format whose column names to bind
    #[arg(short = 'c', long = "column-format", value_parser = parse_record_format)]
    pub column_format: RecordFormat,

    /// Input file, read only for `header` (use '-' for stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

/// Execute bindings subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or output serialization fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: BindingsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let summary = bind(&args)?;

    if verbose {
        eprintln!(
            "Bound {} column names for '{}'",
            summary.bindings.len(),
            args.column_format
        );
    }

    match format {
        OutputFormat::Text => print_text(&summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Tsv => print_tsv(&summary),
    }

    Ok(())
}

fn bind(args: &BindingsArgs) -> anyhow::Result<BindSummary> {
    // Fixed layouts never look at the input, and drained lines are not shown
    let reader: Box<dyn BufRead> = if args.column_format == RecordFormat::Header {
        open_input(&args.input)?
    } else {
        Box::new(std::io::empty())
    };
    let mut host = Host::new(reader, std::io::sink());

    let first = if args.column_format == RecordFormat::Header {
        host.next_record()?
    } else {
        None
    };

    Ok(apply_format(
        Some(args.column_format),
        first.as_deref(),
        &mut host,
    )?)
}

fn print_text(summary: &BindSummary) {
    if summary.bindings.is_empty() {
        println!("No column names bound.");
        return;
    }

    let width = summary
        .bindings
        .iter()
        .map(|b| b.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!("{:<width$}  COLUMN", "NAME");
    for binding in &summary.bindings {
        println!("{:<width$}  {}", binding.name, binding.column);
    }
    if summary.forced_tabs {
        println!("\nFields are tab-separated.");
    }
}

fn print_tsv(summary: &BindSummary) {
    println!("name\tcolumn");
    for binding in &summary.bindings {
        println!("{}\t{}", binding.name, binding.column);
    }
}
