//! Rows and tables read from a protein sheet.
//!
//! A [`Table`] is built once and never mutated. Row order is the order of the source sheet
//! and is the order in which job records are emitted.

use std::fmt;

/// A single `(name, sequence)` row of the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub sequence: String,
}

impl Row {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Row {
            name: name.into(),
            sequence: sequence.into(),
        }
    }
}

/// The kind of file a table was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetFormat {
    /// Any workbook format: xlsx, xlsm, xlsb, xls, ods.
    #[default]
    Xlsx,
    Csv,
    Tsv,
}

impl SheetFormat {
    /// Picks the format from a file extension. Unknown extensions are treated as workbooks.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext.map(|e| e.to_ascii_lowercase()).as_deref() {
            Some("csv") => SheetFormat::Csv,
            Some("tsv") | Some("tab") => SheetFormat::Tsv,
            _ => SheetFormat::Xlsx,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SheetFormat::Xlsx => "xlsx",
            SheetFormat::Csv => "csv",
            SheetFormat::Tsv => "tsv",
        }
    }
}

impl fmt::Display for SheetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered, immutable collection of [`Row`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    rows: Vec<Row>,
    format: SheetFormat,
}

impl Table {
    pub fn new(rows: Vec<Row>, format: SheetFormat) -> Self {
        Table { rows, format }
    }

    /// Builds a workbook-format table from `(name, sequence)` pairs.
    pub fn from_pairs<I, N, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let rows = pairs.into_iter().map(|(n, s)| Row::new(n, s)).collect();
        Table::new(rows, SheetFormat::default())
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn format(&self) -> SheetFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows whose name is exactly `name`.
    pub fn count_named(&self, name: &str) -> usize {
        self.rows.iter().filter(|row| row.name == name).count()
    }
}
