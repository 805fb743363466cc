//! Target lookup and pair emission.

use crate::job::{JobRecord, JobSettings};
use crate::table::{Row, SheetFormat, Table};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairError {
    #[error("target protein '{target}' not found in {format} file.")]
    TargetNotFound { target: String, format: SheetFormat },
}

/// Returns the sequence of the first row named exactly `target`.
///
/// Later rows with the same name are ignored.
pub fn resolve_target<'a>(table: &'a Table, target: &str) -> Result<&'a str, PairError> {
    let mut matches = table.rows().iter().filter(|row| row.name == target);
    let first = matches.next().ok_or_else(|| PairError::TargetNotFound {
        target: target.to_owned(),
        format: table.format(),
    })?;
    let extra = matches.count();
    if extra > 0 {
        log::warn!(
            "target protein '{}' appears {} times; using the first row",
            target,
            extra + 1
        );
    }
    Ok(first.sequence.as_str())
}

/// Lazily yields one [`JobRecord`] per row whose name differs from the target.
pub struct Pairs<'a> {
    rows: std::slice::Iter<'a, Row>,
    target_name: &'a str,
    target_sequence: &'a str,
    settings: &'a JobSettings,
}

impl<'a> Pairs<'a> {
    pub fn new(
        table: &'a Table,
        target_name: &'a str,
        target_sequence: &'a str,
        settings: &'a JobSettings,
    ) -> Self {
        Pairs {
            rows: table.rows().iter(),
            target_name,
            target_sequence,
            settings,
        }
    }
}

impl Iterator for Pairs<'_> {
    type Item = JobRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.find(|row| row.name != self.target_name)?;
        Some(JobRecord::pair(
            self.target_name,
            self.target_sequence,
            &row.name,
            &row.sequence,
            self.settings,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.rows.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Table {
        Table::from_pairs([("A", "SEQA"), ("B", "SEQB"), ("C", "SEQC")])
    }

    #[test]
    fn test_resolve_target() {
        let table = abc();
        assert_eq!(resolve_target(&table, "B").unwrap(), "SEQB");
        assert_eq!(resolve_target(&table, "A").unwrap(), "SEQA");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let table = abc();
        let err = resolve_target(&table, "b").unwrap_err();
        assert_eq!(
            err,
            PairError::TargetNotFound {
                target: "b".to_owned(),
                format: SheetFormat::Xlsx
            }
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = resolve_target(&abc(), "Z").unwrap_err();
        assert_eq!(
            err.to_string(),
            "target protein 'Z' not found in xlsx file."
        );

        let csv = Table::new(abc().rows().to_vec(), SheetFormat::Csv);
        let err = resolve_target(&csv, "Z").unwrap_err();
        assert_eq!(err.to_string(), "target protein 'Z' not found in csv file.");
    }

    #[test]
    fn test_empty_table() {
        assert!(resolve_target(&Table::default(), "A").is_err());
    }

    #[test]
    fn test_pairs_example() {
        let table = abc();
        let settings = JobSettings::default();
        let seq = resolve_target(&table, "B").unwrap();
        let records: Vec<_> = Pairs::new(&table, "B", seq, &settings).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "B_A");
        assert_eq!(records[0].sequences[0].protein_chain.sequence, "SEQB");
        assert_eq!(records[0].sequences[1].protein_chain.sequence, "SEQA");
        assert_eq!(records[1].name, "B_C");
        assert_eq!(records[1].sequences[1].protein_chain.sequence, "SEQC");
    }

    #[test]
    fn test_pairs_count_is_rows_minus_one() {
        let table = Table::from_pairs((0..25).map(|i| (format!("P{i}"), format!("SEQ{i}"))));
        let settings = JobSettings::default();
        let seq = resolve_target(&table, "P24").unwrap();
        let records: Vec<_> = Pairs::new(&table, "P24", seq, &settings).collect();
        assert_eq!(records.len(), table.len() - 1);
        for (record, row) in records.iter().zip(table.rows()) {
            assert_eq!(record.name, format!("P24_{}", row.name));
            assert_eq!(record.sequences[1].protein_chain.sequence, row.sequence);
        }
    }

    #[test]
    fn test_duplicate_target_rows() {
        let table = Table::from_pairs([
            ("A", "SEQA"),
            ("T", "FIRST"),
            ("B", "SEQB"),
            ("T", "SECOND"),
        ]);
        let settings = JobSettings::default();
        let seq = resolve_target(&table, "T").unwrap();
        assert_eq!(seq, "FIRST");

        let records: Vec<_> = Pairs::new(&table, "T", seq, &settings).collect();
        assert_eq!(records.len(), table.len() - table.count_named("T"));
        assert!(records.iter().all(|r| r.name != "T_T"));
        assert!(records
            .iter()
            .all(|r| r.sequences[0].protein_chain.sequence == "FIRST"));
    }

    #[test]
    fn test_target_only_table() {
        let table = Table::from_pairs([("T", "SEQ")]);
        let settings = JobSettings::default();
        let seq = resolve_target(&table, "T").unwrap();
        assert_eq!(Pairs::new(&table, "T", seq, &settings).count(), 0);
    }
}
