//! A minimal record-processing host for the column binder.
//!
//! [`Host`] owns everything the binder mutates: the [`SymbolTable`], the
//! active [`FieldSeparators`], the record stream and the output. Its
//! [`run`](Host::run) loop applies the configured format and then projects
//! each record onto the requested fields.
//!
//! ## Record flow
//!
//! - Fixed formats bind before the first read, so their header lines are
//!   drained and never reach the projection.
//! - `header` mode binds against the first record and then processes that
//!   record like any other, so the output starts with the projected header.

pub mod input;
pub mod projection;
pub mod reader;
pub mod symbols;

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::debug;

use crate::binding::{apply_format, BindSummary, Environment};
use crate::core::error::ColumnError;
use crate::core::format::RecordFormat;
use crate::core::types::FieldSeparators;
use crate::host::projection::{project, Projection};
use crate::host::reader::RecordReader;
use crate::host::symbols::SymbolTable;

/// Counters reported after [`Host::run`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Records passed through the projection
    pub records: usize,

    /// Header records drained by the binder
    pub drained: usize,

    pub binding: BindSummary,
}

pub struct Host<R, W> {
    symbols: SymbolTable,
    separators: FieldSeparators,
    reader: RecordReader<R>,
    writer: W,
}

impl<R: BufRead, W: Write> Host<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            symbols: SymbolTable::new(),
            separators: FieldSeparators::default(),
            reader: RecordReader::new(reader),
            writer,
        }
    }

    #[must_use]
    pub fn with_separators(mut self, separators: FieldSeparators) -> Self {
        self.separators = separators;
        self
    }

    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    #[must_use]
    pub fn separators(&self) -> &FieldSeparators {
        &self.separators
    }

    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Apply `format`, then write every record projected onto `projection`.
    ///
    /// # Errors
    ///
    /// Returns `ColumnError::UnboundName` if the projection names a column the
    /// format did not bind, or `ColumnError::Io` if reading or writing fails.
    pub fn run(
        &mut self,
        format: Option<RecordFormat>,
        projection: &Projection,
    ) -> Result<RunSummary, ColumnError> {
        let mut summary = RunSummary::default();

        // Header mode needs the first record before anything can be resolved
        let mut pending = None;
        if format == Some(RecordFormat::Header) {
            pending = self.next_record()?;
            summary.binding = apply_format(format, pending.as_deref(), self)?;
        } else {
            summary.binding = apply_format(format, None, self)?;
        }
        summary.drained = summary.binding.drained;

        let columns = projection.resolve(&self.symbols)?;
        debug!(?columns, "Resolved output columns");

        if let Some(record) = pending {
            self.write_projected(&record, &columns)?;
            summary.records += 1;
        }
        while let Some(record) = self.next_record()? {
            self.write_projected(&record, &columns)?;
            summary.records += 1;
        }

        self.writer.flush()?;
        debug!(
            records = summary.records,
            drained = summary.drained,
            "Finished processing records"
        );
        Ok(summary)
    }

    fn write_projected(&mut self, record: &[u8], columns: &[usize]) -> std::io::Result<()> {
        let line = project(record, columns, &self.separators);
        self.emit(&line)
    }
}

impl<R: BufRead, W: Write> Environment for Host<R, W> {
    fn bind(&mut self, name: &str, column: usize) {
        self.symbols.bind(name, column);
    }

    fn set_field_separators(&mut self, input: &str, output: &str) {
        self.separators = FieldSeparators::new(input, output);
    }

    fn peek_record(&mut self) -> std::io::Result<Option<&[u8]>> {
        self.reader.peek_record()
    }

    fn next_record(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        self.reader.next_record()
    }

    fn emit(&mut self, record: &[u8]) -> std::io::Result<()> {
        self.writer.write_all(record)?;
        self.writer.write_all(b"\n")
    }
}
