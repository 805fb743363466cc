//! Sheet loading.
//!
//! The first column is the protein name and the second its sequence. The first row is data,
//! never a header. Cells are taken as text exactly as displayed; nothing is trimmed.

use crate::error::LoadError;
use calamine::{open_workbook_auto, Data, Range, Reader};
use foldpair_core::{Row, SheetFormat, Table};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Loads `path` into a [`Table`], picking the reader from the file extension.
///
/// `sheet` selects a worksheet by name for workbook formats; the first worksheet is used
/// otherwise. It is ignored for delimited files.
pub fn load_table(path: &Path, sheet: Option<&str>) -> Result<Table, LoadError> {
    let format = SheetFormat::from_extension(path.extension().and_then(|e| e.to_str()));
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = match format {
        SheetFormat::Xlsx => {
            drop(file);
            read_workbook(path, sheet)?
        }
        SheetFormat::Csv => read_delimited(BufReader::new(file), b',')?,
        SheetFormat::Tsv => read_delimited(BufReader::new(file), b'\t')?,
    };
    log::info!("loaded {} rows from {}", rows.len(), path.display());
    Ok(Table::new(rows, format))
}

fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<Vec<Row>, LoadError> {
    let workbook_err = |source: calamine::Error| LoadError::Workbook {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(workbook_err)?;
    let range = match sheet {
        Some(name) => {
            let names = workbook.sheet_names();
            if !names.iter().any(|n| n == name) {
                return Err(LoadError::MissingSheet {
                    name: name.to_owned(),
                    available: names.join(", "),
                });
            }
            workbook.worksheet_range(name).map_err(workbook_err)?
        }
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| LoadError::NoSheets {
                path: path.to_path_buf(),
            })?
            .map_err(workbook_err)?,
    };
    rows_from_range(&range)
}

fn rows_from_range(range: &Range<Data>) -> Result<Vec<Row>, LoadError> {
    if range.is_empty() {
        return Ok(Vec::new());
    }
    if range.width() < 2 {
        return Err(LoadError::TooFewColumns {
            found: range.width(),
        });
    }
    let rows = range
        .rows()
        .filter_map(|cells| {
            let name = cells[0].to_string();
            let sequence = cells[1].to_string();
            // blank rows inside the used range
            if name.is_empty() && sequence.is_empty() {
                None
            } else {
                Some(Row { name, sequence })
            }
        })
        .collect();
    Ok(rows)
}

/// Reads headerless delimited text. Extra fields are ignored; blank lines are skipped.
pub fn read_delimited<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Row>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(LoadError::Delimited)?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        match (record.get(0), record.get(1)) {
            (Some(name), Some(sequence)) => rows.push(Row::new(name, sequence)),
            _ => {
                return Err(LoadError::ShortRecord {
                    line: record.position().map_or(0, |p| p.line()),
                })
            }
        }
    }
    Ok(rows)
}
