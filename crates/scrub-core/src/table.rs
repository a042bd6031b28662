//! In-memory tabular data.

use serde::{Deserialize, Serialize};

/// A table of named columns and string-valued rows.
///
/// Column order is the source order and is preserved through
/// de-identification. Ragged rows are legal: a missing cell reads as
/// empty and extra cells beyond the header are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// A borrowed view of one cell during a scan.
///
/// `row_index` is 1-based over data rows (the header is not a row),
/// matching the row numbering used in detection reports.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    pub row_index: usize,
    pub column_name: &'a str,
    pub value: &'a str,
}

impl Table {
    /// Creates a table from a header and rows.
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Creates a table with a header and no rows.
    #[must_use]
    pub fn empty(columns: Vec<String>) -> Self {
        Self::new(columns, Vec::new())
    }

    /// The column names, in source order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The data rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True if the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the index of a column by name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns the value at a 0-based (row, column) position.
    ///
    /// A position inside the table but beyond a ragged row reads as
    /// the empty string.
    #[must_use]
    pub fn value_at(&self, row: usize, column: usize) -> Option<&str> {
        if column >= self.columns.len() {
            return None;
        }
        self.rows
            .get(row)
            .map(|r| r.get(column).map_or("", String::as_str))
    }

    /// Replaces the value at a 0-based (row, column) position.
    ///
    /// Pads a ragged row out to the column if needed. Returns false if
    /// the position is outside the table.
    pub fn set_value(&mut self, row: usize, column: usize, value: String) -> bool {
        if column >= self.columns.len() {
            return false;
        }
        let Some(r) = self.rows.get_mut(row) else {
            return false;
        };
        if r.len() <= column {
            r.resize(column + 1, String::new());
        }
        r[column] = value;
        true
    }

    /// Iterates every cell in row-major order, then column order.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> {
        self.rows.iter().enumerate().flat_map(move |(r, row)| {
            self.columns.iter().enumerate().map(move |(c, name)| Cell {
                row_index: r + 1,
                column_name: name,
                value: row.get(c).map_or("", String::as_str),
            })
        })
    }
}
