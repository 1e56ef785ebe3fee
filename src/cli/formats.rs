use crate::cli::OutputFormat;
use crate::core::format::RecordFormat;

/// Execute formats subcommand
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text(),
        OutputFormat::Json => print_json()?,
        OutputFormat::Tsv => print_tsv(),
    }
    Ok(())
}

fn describe_columns(format: RecordFormat) -> String {
    if format == RecordFormat::Header {
        return "(names from the first record)".to_string();
    }
    format
        .columns()
        .iter()
        .map(|(name, column)| format!("{name}:{column}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_text() {
    let width = RecordFormat::ALL
        .iter()
        .map(|f| f.as_str().len())
        .max()
        .unwrap_or(6);

    println!("{:<width$}  {:<6}  COLUMNS", "FORMAT", "HEADER");
    for format in RecordFormat::ALL {
        let marker = format
            .header_marker()
            .map_or_else(|| "-".to_string(), |b| char::from(b).to_string());
        println!(
            "{:<width$}  {:<6}  {}",
            format.as_str(),
            marker,
            describe_columns(format)
        );
    }
}

fn print_json() -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = RecordFormat::ALL
        .iter()
        .map(|format| {
            let columns: Vec<serde_json::Value> = format
                .columns()
                .iter()
                .map(|(name, column)| serde_json::json!({ "name": name, "column": column }))
                .collect();
            serde_json::json!({
                "format": format.as_str(),
                "header_marker": format.header_marker().map(|b| char::from(b).to_string()),
                "tab_separated": format.forces_tabs(),
                "columns": columns,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv() {
    println!("format\tname\tcolumn");
    for format in RecordFormat::ALL {
        for (name, column) in format.columns() {
            println!("{format}\t{name}\t{column}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_columns() {
        assert_eq!(
            describe_columns(RecordFormat::BedGraph),
            "chrom:1 start:2 end:3 score:4"
        );
        assert!(describe_columns(RecordFormat::Gff).ends_with("group:9 attribute:9"));
        assert!(describe_columns(RecordFormat::Header).contains("first record"));
    }
}
