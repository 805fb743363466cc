//! The load, pair, write pipeline.

use crate::error::ConvertError;
use crate::jobfile::write_job_file;
use crate::sheet::load_table;
use foldpair_core::{resolve_target, JobSettings, Pairs};
use std::path::{Path, PathBuf};

/// Everything one conversion needs; no ambient state is consulted.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub target: String,
    pub output: PathBuf,
    pub sheet: Option<String>,
    pub settings: JobSettings,
}

impl ConvertRequest {
    /// Request writing to [`default_output_path`] with default job settings.
    pub fn new(input: impl Into<PathBuf>, target: impl Into<String>) -> Self {
        let input = input.into();
        let target = target.into();
        let output = default_output_path(&input, &target);
        ConvertRequest {
            input,
            target,
            output,
            sheet: None,
            settings: JobSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub rows: usize,
    pub records: usize,
    pub output: PathBuf,
}

/// `<input stem>_<target>.json`, relative to the working directory.
pub fn default_output_path(input: &Path, target: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    PathBuf::from(format!("{stem}_{target}.json"))
}

/// Loads the sheet, resolves the target and writes one job per other protein.
///
/// Fails before touching `request.output` when the sheet cannot be read or the target
/// is absent.
pub fn convert(request: &ConvertRequest) -> Result<ConvertSummary, ConvertError> {
    let table = load_table(&request.input, request.sheet.as_deref())?;
    let target_sequence = resolve_target(&table, &request.target)?;
    let pairs = Pairs::new(&table, &request.target, target_sequence, &request.settings);
    let records = write_job_file(&request.output, pairs)?;
    Ok(ConvertSummary {
        rows: table.len(),
        records,
        output: request.output.clone(),
    })
}
