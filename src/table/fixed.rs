use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    config::TableConfig,
    misc::log::targets::{self},
    table::{check_row, file_prefix, timestamp, Cell, Column, Table},
    types::err::{ConfigError, TableError},
};

/// A table of right-justified cells, rotating through numbered files.
///
/// Files are named `<label>_<timestamp><counter>.dat`, with the counter zero-padded to ten digits.
/// Each file holds a header and at most `rotation` rows.
/// Once a file holds `rotation` rows it is closed, and the next row written opens the next file in sequence.
///
/// Only a single file is open at any time, and rows are written through a buffer, so a table may be written to indefinitely.
///
/// ```rust
/// # use ksat_sweep::config::TableConfig;
/// # use ksat_sweep::table::{Column, FixedWidthTable, Table};
/// let directory = tempfile::tempdir().unwrap();
///
/// let mut config = TableConfig::default();
/// config.directory = directory.path().to_path_buf();
///
/// let columns = vec![Column::new("N", 4), Column::new("mean", 6)];
/// let mut table = FixedWidthTable::from_config(&config, columns).unwrap();
///
/// table.write_row(&[20, 113]).unwrap();
/// table.close().unwrap();
///
/// let written = std::fs::read_to_string(table.last_path().unwrap()).unwrap();
/// assert_eq!(written, "   N  mean\n  20   113\n");
/// ```
pub struct FixedWidthTable {
    directory: PathBuf,
    prefix: String,
    columns: Vec<Column>,
    rotation: usize,

    /// The number of the current (or next) file.
    file_counter: usize,

    /// Rows written to the current file.
    row_count: usize,

    file: Option<BufWriter<File>>,
    files_opened: usize,
    last_path: Option<PathBuf>,
    closed: bool,
}

impl FixedWidthTable {
    /// A table with the given schema, timestamped with the current time.
    pub fn from_config(config: &TableConfig, columns: Vec<Column>) -> Result<Self, ConfigError> {
        Self::with_stamp(config, columns, &timestamp())
    }

    /// A table with the given schema and timestamp.
    pub fn with_stamp(
        config: &TableConfig,
        columns: Vec<Column>,
        stamp: &str,
    ) -> Result<Self, ConfigError> {
        if columns.is_empty() {
            return Err(ConfigError::EmptySchema);
        }
        config.rotation.validate()?;

        Ok(FixedWidthTable {
            directory: config.directory.clone(),
            prefix: file_prefix(config.label.as_deref(), stamp),
            columns,
            rotation: config.rotation.value,
            file_counter: 0,
            row_count: 0,
            file: None,
            files_opened: 0,
            last_path: None,
            closed: false,
        })
    }

    /// The path of the most recently opened file, if any file has been opened.
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }

    /// The count of files opened.
    pub fn file_count(&self) -> usize {
        self.files_opened
    }

    fn path_for(&self, counter: usize) -> PathBuf {
        self.directory
            .join(format!("{}{counter:010}.dat", self.prefix))
    }

    /// Opens the next file of the table and writes the header.
    ///
    /// An existing file is never overwritten, and is instead an error.
    fn open(&mut self) -> Result<BufWriter<File>, TableError> {
        std::fs::create_dir_all(&self.directory)?;

        let path = self.path_for(self.file_counter);
        let mut file = BufWriter::new(OpenOptions::new().write(true).create_new(true).open(&path)?);

        for column in &self.columns {
            write!(file, "{:>width$}", column.name, width = column.width)?;
        }
        writeln!(file)?;

        log::info!(target: targets::TABLE, "Opened {path:?}");

        self.row_count = 0;
        self.files_opened += 1;
        self.last_path = Some(path);
        Ok(file)
    }

    /// Closes the current file and moves the counter to the next file.
    ///
    /// The counter moves on even if the flush fails, so the numbered file is never reopened.
    fn rotate(&mut self) -> Result<(), TableError> {
        self.file_counter += 1;
        if let Some(mut file) = self.file.take() {
            file.flush()?;
            log::info!(target: targets::TABLE, "Rotated after {} rows", self.row_count);
        }
        Ok(())
    }
}

impl Table for FixedWidthTable {
    fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn write_row(&mut self, row: &[Cell]) -> Result<(), TableError> {
        if self.closed {
            return Err(TableError::Closed);
        }
        check_row(&self.columns, row)?;

        if self.file.is_none() {
            self.file = Some(self.open()?);
        }

        if let Some(file) = &mut self.file {
            for (column, cell) in self.columns.iter().zip(row) {
                write!(file, "{:>width$}", cell, width = column.width)?;
            }
            writeln!(file)?;
        }

        self.row_count += 1;

        if self.row_count >= self.rotation {
            self.rotate()?;
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<(), TableError> {
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), TableError> {
        self.closed = true;
        if let Some(mut file) = self.file.take() {
            file.flush()?;
            log::info!(target: targets::TABLE, "Closed {:?}", self.last_path);
        }
        Ok(())
    }
}

impl Drop for FixedWidthTable {
    fn drop(&mut self) {
        if let Some(mut file) = self.file.take() {
            if let Err(e) = file.flush() {
                log::error!(target: targets::TABLE, "Failed to flush {:?}: {e}", self.last_path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_in(directory: &Path, rotation: usize) -> FixedWidthTable {
        let mut config = TableConfig {
            directory: directory.to_path_buf(),
            ..Default::default()
        };
        config.rotation.value = rotation;

        FixedWidthTable::with_stamp(&config, vec![Column::new("N", 4)], "stamp_").unwrap()
    }

    #[test]
    fn rotation_advances_counter() {
        let directory = tempfile::tempdir().unwrap();
        let mut table = table_in(directory.path(), 2);

        for row in 0..5 {
            assert!(table.write_row(&[row]).is_ok());
        }
        assert_eq!(table.file_counter, 2);
        assert_eq!(table.row_count, 1);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_rotation_still_advances_counter() {
        let directory = tempfile::tempdir().unwrap();
        let mut table = table_in(directory.path(), 1);

        // Every write to /dev/full fails, though only once the buffer is flushed.
        let full = OpenOptions::new().write(true).open("/dev/full").unwrap();
        table.file = Some(BufWriter::new(full));

        assert!(matches!(table.write_row(&[1]), Err(TableError::Io(_))));
        assert_eq!(table.file_counter, 1);
        assert!(table.file.is_none());

        assert!(table.write_row(&[2]).is_ok());
        assert!(table.close().is_ok());
        assert!(table.last_path().unwrap().ends_with("stamp_0000000001.dat"));
    }
}
