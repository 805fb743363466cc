use chrono::NaiveDate;
use clap::Parser;
use foldpair_core::{JobSettings, DEFAULT_MAX_TEMPLATE_DATE};
use foldpair_io::{convert, default_output_path, ConvertError, ConvertRequest};
use std::path::PathBuf;
use std::process::ExitCode;

/// Input or output file could not be read or written.
pub const EXIT_IO: u8 = 1;
/// Target protein missing from the sheet. Usage errors exit 2 through clap.
pub const EXIT_TARGET_NOT_FOUND: u8 = 3;

/// Pair one target protein against every other protein in a sheet and write an
/// AlphaFold Server batch job file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: foldpair \"Lectin sequences2.xlsx\" mKLRI1")]
pub struct Cli {
    /// Two-column sheet (name, sequence) without a header row: xlsx, xls, xlsb, ods, csv or tsv
    input: PathBuf,

    /// Protein paired against every other row
    target: String,

    /// Worksheet to read instead of the first one
    #[arg(long)]
    sheet: Option<String>,

    /// Output file [default: <input stem>_<target>.json]
    #[arg(short, long, conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Directory for the default-named output file
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Model seed added to every job; repeat for several seeds
    #[arg(long = "seed", value_name = "N")]
    seeds: Vec<u64>,

    /// Template release cutoff, YYYY-MM-DD
    #[arg(long, value_parser = JobSettings::parse_date, default_value_t = DEFAULT_MAX_TEMPLATE_DATE)]
    max_template_date: NaiveDate,

    /// Disable structure templates for both chains
    #[arg(long)]
    no_structure_template: bool,
}

impl Cli {
    fn request(self) -> ConvertRequest {
        let output = match (self.output, self.output_dir) {
            (Some(path), _) => path,
            (None, Some(dir)) => dir.join(default_output_path(&self.input, &self.target)),
            (None, None) => default_output_path(&self.input, &self.target),
        };
        ConvertRequest {
            input: self.input,
            target: self.target,
            output,
            sheet: self.sheet,
            settings: JobSettings {
                model_seeds: self.seeds,
                use_structure_template: !self.no_structure_template,
                max_template_date: self.max_template_date,
            },
        }
    }

    pub fn execute(self) -> anyhow::Result<()> {
        let request = self.request();
        log::debug!("{:?}", request);
        let summary = convert(&request)?;
        log::info!(
            "{} of {} rows paired with '{}' into {}",
            summary.records,
            summary.rows,
            request.target,
            summary.output.display()
        );
        Ok(())
    }
}

pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<ConvertError>() {
        Some(ConvertError::Target(_)) => ExitCode::from(EXIT_TARGET_NOT_FOUND),
        _ => ExitCode::from(EXIT_IO),
    }
}
