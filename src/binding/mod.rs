//! Binding column names for a configured record format.
//!
//! [`apply_format`] is the single entry point. It installs the bindings for
//! the format into the host's name table and, for fixed formats, forces tab
//! separators and drains leading header records.
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use colnames::binding::apply_format;
//! use colnames::core::format::RecordFormat;
//! use colnames::host::Host;
//!
//! let input = Cursor::new("@HD\tVN:1.6\nr1\t0\tchr1\t100\n");
//! let mut host = Host::new(input, Vec::new());
//!
//! let summary = apply_format(Some(RecordFormat::Sam), None, &mut host).unwrap();
//! assert_eq!(summary.drained, 1);
//! assert_eq!(host.symbols().column("rname"), Some(3));
//! ```

pub mod header;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::core::error::ColumnError;
use crate::core::format::RecordFormat;
use crate::core::types::{ColumnBinding, TAB};

/// What the binder needs from the host.
pub trait Environment {
    /// Bind `name` to a numeric column, creating it or overwriting its value.
    fn bind(&mut self, name: &str, column: usize);

    /// Replace the input and output field separators for the rest of the run.
    fn set_field_separators(&mut self, input: &str, output: &str);

    /// Look at the next record, without its terminator, without consuming it.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the record source fails.
    fn peek_record(&mut self) -> std::io::Result<Option<&[u8]>>;

    /// Consume the next record. Records are raw bytes and need not be UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the record source fails.
    fn next_record(&mut self) -> std::io::Result<Option<Vec<u8>>>;

    /// Write a record verbatim to the output, followed by the record terminator.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn emit(&mut self, record: &[u8]) -> std::io::Result<()>;
}

/// Outcome of [`apply_format`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BindSummary {
    /// The applied format, `None` when nothing was configured
    pub format: Option<RecordFormat>,

    /// Bindings in the order they were installed
    pub bindings: Vec<ColumnBinding>,

    /// Header records emitted before data
    pub drained: usize,

    /// Whether both separators were set to a tab
    pub forced_tabs: bool,
}

impl BindSummary {
    /// The column a name ended up bound to. Later bindings win.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.bindings
            .iter()
            .rev()
            .find(|b| b.name == name)
            .map(|b| b.column)
    }
}

/// Bind column names for `format`.
///
/// `current_record` is the record that header mode takes its names from. It is
/// ignored by fixed formats. A `format` of `None` is a no-op.
///
/// # Errors
///
/// Returns `ColumnError::Io` if draining header records fails to read or write.
pub fn apply_format<E: Environment>(
    format: Option<RecordFormat>,
    current_record: Option<&[u8]>,
    env: &mut E,
) -> Result<BindSummary, ColumnError> {
    let Some(format) = format else {
        return Ok(BindSummary::default());
    };

    let mut summary = BindSummary {
        format: Some(format),
        ..BindSummary::default()
    };

    match format {
        RecordFormat::Header => {
            for (name, column) in header::column_names(current_record.unwrap_or_default()) {
                install(env, &mut summary, &name, column);
            }
            if summary.bindings.is_empty() {
                warn!("Header record has no usable column names");
            }
        }
        RecordFormat::Bed
        | RecordFormat::BedGraph
        | RecordFormat::Sam
        | RecordFormat::Vcf
        | RecordFormat::Gff
        | RecordFormat::Gtf => {
            for &(name, column) in format.columns() {
                install(env, &mut summary, name, column);
            }
            env.set_field_separators(TAB, TAB);
            summary.forced_tabs = true;

            if let Some(marker) = format.header_marker() {
                summary.drained = drain_header(env, marker)?;
            }
        }
    }

    debug!(
        format = %format,
        bindings = summary.bindings.len(),
        drained = summary.drained,
        "Applied column names"
    );

    Ok(summary)
}

fn install<E: Environment>(env: &mut E, summary: &mut BindSummary, name: &str, column: usize) {
    debug!(name, column, "Binding column");
    env.bind(name, column);
    summary.bindings.push(ColumnBinding::new(name, column));
}

/// Emit leading records that start with `marker`, stopping before the first
/// record that does not.
fn drain_header<E: Environment>(env: &mut E, marker: u8) -> Result<usize, ColumnError> {
    let mut drained = 0;

    loop {
        match env.peek_record()? {
            Some(record) if record.first() == Some(&marker) => {}
            _ => break,
        }
        // Present: it was just peeked
        let Some(record) = env.next_record()? else {
            break;
        };
        trace!(record = %String::from_utf8_lossy(&record), "Passing header record through");
        env.emit(&record)?;
        drained += 1;
    }

    Ok(drained)
}
