use crate::output::{Header, OutputError, Table};

use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the rows of a single table beneath its header.
pub struct TableWriter<W: Write> {
    table: Table,
    writer: csv::Writer<W>,
    rows: usize,
}

impl TableWriter<BufWriter<File>> {
    /// Creates the file of `table` within `directory`.
    pub fn create(directory: &Path, table: Table, header: &Header) -> Result<Self, OutputError> {
        let path = directory.join(table.file_name());
        info!("Dumping {}...", table.file_name());

        let file = File::create(&path).map_err(|source| OutputError::Io {
            table: table.to_string(),
            source,
        })?;

        Self::new(BufWriter::new(file), table, header)
    }
}

impl<W: Write> TableWriter<W> {
    pub fn new(mut inner: W, table: Table, header: &Header) -> Result<Self, OutputError> {
        header
            .write_to(table, &mut inner)
            .map_err(|source| OutputError::Io {
                table: table.to_string(),
                source,
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(table.columns())?;

        Ok(Self {
            table,
            writer,
            rows: 0,
        })
    }

    pub fn table(&self) -> Table {
        self.table
    }

    pub fn write<S: Serialize>(&mut self, row: S) -> Result<(), OutputError> {
        self.writer.serialize(row)?;
        self.rows += 1;
        Ok(())
    }

    /// Flushes the table, returning the number of rows written and the
    /// underlying writer.
    pub fn finish(self) -> Result<(usize, W), OutputError> {
        let table = self.table;
        let rows = self.rows;
        let inner = self.writer.into_inner().map_err(|err| OutputError::Io {
            table: table.to_string(),
            source: err.into_error(),
        })?;

        Ok((rows, inner))
    }
}
