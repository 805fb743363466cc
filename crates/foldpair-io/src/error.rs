//! Error types for reading sheets and writing job files.

use foldpair_core::PairError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open input file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read spreadsheet {}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("cannot parse delimited input")]
    Delimited(#[source] csv::Error),

    #[error("spreadsheet {} contains no worksheets", path.display())]
    NoSheets { path: PathBuf },

    #[error("worksheet '{name}' not found; available sheets: {available}")]
    MissingSheet { name: String, available: String },

    #[error("expected two columns (name, sequence) but the sheet has {found}")]
    TooFewColumns { found: usize },

    #[error("line {line}: expected two fields (name, sequence)")]
    ShortRecord { line: u64 },
}

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("cannot create output file in {}", dir.display())]
    Create {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write job records")]
    Serialize(#[source] serde_json::Error),

    #[error("cannot move output into place at {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Target(#[from] PairError),

    #[error(transparent)]
    Write(#[from] WriteError),
}
