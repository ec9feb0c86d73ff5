/*!
Tables of scalars, written to disk.

A table is made of a schema --- an ordered list of [columns](Column) --- and rows of [cells](Cell) which follow the schema.
Every row written to a table must have exactly one cell for each column, in the order of the schema.

Two tables are implemented:
- A [FixedWidthTable], which right-justifies each cell to the width of its column and rotates through numbered files after a fixed count of rows.
- A [DelimitedTable], which separates cells by commas and writes to a single file.

In either case the file of a table is opened on the first write, and a header of the column names is written to each file opened.
Files are closed on [close](Table::close), and flushed if the table is dropped before being closed.
*/

use chrono::Local;

mod delimited;
mod fixed;

pub use delimited::DelimitedTable;
pub use fixed::FixedWidthTable;

use crate::types::err::TableError;

/// The value of a single cell of a table.
pub type Cell = i64;

/// A column of a table, a name paired with a width.
///
/// The width is used only by fixed width tables, and names which exceed the width are written in full.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub width: usize,
}

impl Column {
    pub fn new(name: impl Into<String>, width: usize) -> Self {
        Column {
            name: name.into(),
            width,
        }
    }
}

/// Something to which rows may be written.
pub trait Table {
    /// The schema of the table.
    fn columns(&self) -> &[Column];

    /// Writes a row to the table.
    ///
    /// Fails if the count of cells differs from the count of columns, or on any I/O error.
    fn write_row(&mut self, row: &[Cell]) -> Result<(), TableError>;

    /// Flushes any buffered rows to disk.
    fn flush(&mut self) -> Result<(), TableError>;

    /// Flushes and closes the table.
    ///
    /// Closing a closed table does nothing, though writing to a closed table is an error.
    fn close(&mut self) -> Result<(), TableError>;
}

/// A timestamp of the current (local) time, used to name the files of a table.
///
/// For example, `10-18_14:05_` at five past two in the afternoon on the 18th of October.
pub fn timestamp() -> String {
    Local::now().format("%m-%d_%H:%M_").to_string()
}

/// The prefix shared by all files of a table, made from an optional label and a timestamp.
fn file_prefix(label: Option<&str>, stamp: &str) -> String {
    match label {
        Some(label) => format!("{label}_{stamp}"),
        None => stamp.to_string(),
    }
}

/// Checks a row against the schema of a table.
fn check_row(columns: &[Column], row: &[Cell]) -> Result<(), TableError> {
    match columns.len() == row.len() {
        true => Ok(()),
        false => Err(TableError::ColumnCount {
            expected: columns.len(),
            found: row.len(),
        }),
    }
}
