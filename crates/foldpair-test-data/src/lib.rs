//! foldpair-test-data
//!
//! Protein sheets embedded in the crate for use in testing.
//!
//! The fixtures are represented as `TestFile` objects which package the raw bytes
//! and create temporary files for programs to operate on.
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use foldpair_test_data::TestFile;
/// let (sheet, _temp) = TestFile::abc_xlsx().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Rows `A/SEQA`, `B/SEQB`, `C/SEQC` on a single sheet.
    pub fn abc_xlsx() -> Self {
        Self {
            filebinary: include_bytes!("../data/abc.xlsx"),
            suffix: "xlsx",
        }
    }
    /// Same rows as [`TestFile::abc_xlsx`], comma separated.
    pub fn abc_csv() -> Self {
        Self {
            filebinary: include_bytes!("../data/abc.csv"),
            suffix: "csv",
        }
    }
    /// Same rows as [`TestFile::abc_xlsx`], tab separated.
    pub fn abc_tsv() -> Self {
        Self {
            filebinary: include_bytes!("../data/abc.tsv"),
            suffix: "tsv",
        }
    }
    /// `A, T, B, T, C`: target `T` appears twice, first with `MKTFIRST`.
    pub fn duplicate_target_xlsx() -> Self {
        Self {
            filebinary: include_bytes!("../data/duplicate_target.xlsx"),
            suffix: "xlsx",
        }
    }
    /// Two sheets.
    ///
    /// `Lectins`: mKLRI1, mKLRI2, mNKG2D.
    /// `Controls`: CTRL, a numeric name `1234`, a blank row, then a second mNKG2D.
    pub fn lectins_xlsx() -> Self {
        Self {
            filebinary: include_bytes!("../data/lectins.xlsx"),
            suffix: "xlsx",
        }
    }
    /// Names containing a double quote and a backslash.
    pub fn quoted_names_csv() -> Self {
        Self {
            filebinary: include_bytes!("../data/quoted_names.csv"),
            suffix: "csv",
        }
    }
    /// Only a name column.
    pub fn single_column_csv() -> Self {
        Self {
            filebinary: include_bytes!("../data/single_column.csv"),
            suffix: "csv",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }

    /// Writes the fixture as `<dir>/<stem>.<suffix>`; output names derive from the stem.
    pub fn create_in(&self, dir: &Path, stem: &str) -> std::io::Result<PathBuf> {
        let path = dir.join(format!("{}.{}", stem, self.suffix));
        fs::write(&path, self.filebinary)?;
        Ok(path)
    }
}
