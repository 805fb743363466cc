//! foldpair-io
//!
//! - load protein sheets (xlsx, xls, xlsb, ods, csv, tsv) into a [`foldpair_core::Table`]
//! - write job records as an AlphaFold Server batch file
//! - [`convert`]: the load, pair, write pipeline
//!
mod error;
mod jobfile;
mod pipeline;
mod sheet;

pub use error::{ConvertError, LoadError, WriteError};
pub use jobfile::{write_job_file, write_jobs};
pub use pipeline::{convert, default_output_path, ConvertRequest, ConvertSummary};
pub use sheet::{load_table, read_delimited};
