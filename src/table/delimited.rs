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

/// A table of comma-separated cells, written to a single file.
///
/// The file is named `<label>_<timestamp>trace.csv` and is never rotated.
/// Column widths are ignored.
pub struct DelimitedTable {
    path: PathBuf,
    columns: Vec<Column>,
    file: Option<BufWriter<File>>,
    rows: usize,
    closed: bool,
}

impl DelimitedTable {
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

        let name = format!("{}trace.csv", file_prefix(config.label.as_deref(), stamp));

        Ok(DelimitedTable {
            path: config.directory.join(name),
            columns,
            file: None,
            rows: 0,
            closed: false,
        })
    }

    /// The path of the file of the table, whether or not the file has been opened.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The count of rows written.
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn open(&mut self) -> Result<BufWriter<File>, TableError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(
            OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&self.path)?,
        );

        let header = self
            .columns
            .iter()
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(file, "{header}")?;

        log::info!(target: targets::TABLE, "Opened {:?}", self.path);
        Ok(file)
    }
}

impl Table for DelimitedTable {
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
            let mut cells = row.iter();
            if let Some(first) = cells.next() {
                write!(file, "{first}")?;
            }
            for cell in cells {
                write!(file, ",{cell}")?;
            }
            writeln!(file)?;
        }

        self.rows += 1;
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
            log::info!(target: targets::TABLE, "Closed {:?} after {} rows", self.path, self.rows);
        }
        Ok(())
    }
}

impl Drop for DelimitedTable {
    fn drop(&mut self) {
        if let Some(mut file) = self.file.take() {
            if let Err(e) = file.flush() {
                log::error!(target: targets::TABLE, "Failed to flush {:?}: {e}", self.path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_rows() {
        let directory = tempfile::tempdir().unwrap();
        let config = TableConfig {
            directory: directory.path().to_path_buf(),
            label: Some("convergence".to_string()),
            ..Default::default()
        };

        let columns = vec![Column::new("num_nodes", 17), Column::new("num_edges", 17)];
        let mut table = DelimitedTable::with_stamp(&config, columns, "stamp_").unwrap();

        assert!(table.write_row(&[5, 9]).is_ok());
        assert!(table.write_row(&[7, 13]).is_ok());
        assert_eq!(
            table.write_row(&[1]),
            Err(TableError::ColumnCount {
                expected: 2,
                found: 1
            })
        );
        assert!(table.close().is_ok());
        assert_eq!(table.write_row(&[1, 2]), Err(TableError::Closed));

        assert!(table.path().ends_with("convergence_stamp_trace.csv"));
        let written = std::fs::read_to_string(table.path()).unwrap();
        assert_eq!(written, "num_nodes,num_edges\n5,9\n7,13\n");
    }

    #[test]
    fn existing_files_are_kept() {
        let directory = tempfile::tempdir().unwrap();
        let config = TableConfig {
            directory: directory.path().to_path_buf(),
            ..Default::default()
        };
        let columns = vec![Column::new("num_nodes", 17)];

        let mut first = DelimitedTable::with_stamp(&config, columns.clone(), "stamp_").unwrap();
        assert!(first.write_row(&[5]).is_ok());
        assert!(first.close().is_ok());

        let mut second = DelimitedTable::with_stamp(&config, columns, "stamp_").unwrap();
        assert_eq!(
            second.write_row(&[7]),
            Err(TableError::Io(std::io::ErrorKind::AlreadyExists))
        );

        let written = std::fs::read_to_string(first.path()).unwrap();
        assert_eq!(written, "num_nodes\n5\n");
    }
}
