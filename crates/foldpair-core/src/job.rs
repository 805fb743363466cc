//! AlphaFold Server job records.
//!
//! Field declaration order is the key order of the emitted JSON and must not change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DIALECT: &str = "alphafoldserver";
pub const VERSION: u32 = 1;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_MAX_TEMPLATE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 2, 3) {
    Some(date) => date,
    None => panic!("invalid default template date"),
};

/// Per-run metadata shared by every emitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSettings {
    pub model_seeds: Vec<u64>,
    pub use_structure_template: bool,
    pub max_template_date: NaiveDate,
}

impl Default for JobSettings {
    fn default() -> Self {
        JobSettings {
            model_seeds: Vec::new(),
            use_structure_template: true,
            max_template_date: DEFAULT_MAX_TEMPLATE_DATE,
        }
    }
}

impl JobSettings {
    /// Parses a `YYYY-MM-DD` template cutoff date.
    pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
    }

    fn chain(&self, sequence: &str) -> ProteinChain {
        ProteinChain {
            sequence: sequence.to_owned(),
            count: 1,
            use_structure_template: self.use_structure_template,
            max_template_date: self.max_template_date.format(DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinChain {
    pub sequence: String,
    pub count: u32,
    pub use_structure_template: bool,
    pub max_template_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceEntry {
    pub protein_chain: ProteinChain,
}

/// One two-chain structure prediction request: target chain first, partner second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub name: String,
    pub model_seeds: Vec<u64>,
    pub sequences: Vec<SequenceEntry>,
    pub dialect: String,
    pub version: u32,
}

impl JobRecord {
    pub fn pair(
        target_name: &str,
        target_sequence: &str,
        other_name: &str,
        other_sequence: &str,
        settings: &JobSettings,
    ) -> Self {
        JobRecord {
            name: format!("{target_name}_{other_name}"),
            model_seeds: settings.model_seeds.clone(),
            sequences: vec![
                SequenceEntry {
                    protein_chain: settings.chain(target_sequence),
                },
                SequenceEntry {
                    protein_chain: settings.chain(other_sequence),
                },
            ],
            dialect: DIALECT.to_owned(),
            version: VERSION,
        }
    }
}
