//! AlphaFold Server batch files.
//!
//! A batch file is a pretty-printed JSON array of [`JobRecord`]s with two-space indentation
//! and a trailing newline.

use crate::error::WriteError;
use foldpair_core::JobRecord;
use serde::Serializer as _;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Streams `records` to `writer` as a JSON array. Returns the number of records written.
pub fn write_jobs<W, I>(mut writer: W, records: I) -> Result<usize, serde_json::Error>
where
    W: Write,
    I: IntoIterator<Item = JobRecord>,
{
    let mut count = 0;
    {
        let mut ser = serde_json::Serializer::pretty(&mut writer);
        (&mut ser).collect_seq(records.into_iter().inspect(|record| {
            count += 1;
            log::debug!("job {}: {}", count, record.name);
        }))?;
    }
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    Ok(count)
}

/// Writes `records` to `path`, replacing any existing file.
///
/// Output goes to a temporary file in the destination directory which is renamed over `path`
/// once every record is written. On error `path` is left untouched.
pub fn write_job_file<I>(path: &Path, records: I) -> Result<usize, WriteError>
where
    I: IntoIterator<Item = JobRecord>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let create_err = |source: std::io::Error| WriteError::Create {
        dir: dir.to_path_buf(),
        source,
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".foldpair-")
        .suffix(".json.tmp")
        .tempfile_in(dir)
        .map_err(create_err)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(create_err)?;
    }

    let count = {
        let mut writer = BufWriter::new(temp.as_file_mut());
        let count = write_jobs(&mut writer, records).map_err(WriteError::Serialize)?;
        writer
            .flush()
            .map_err(|e| WriteError::Serialize(serde_json::Error::io(e)))?;
        count
    };
    persist(temp, path)?;
    log::info!("wrote {} job records to {}", count, path.display());
    Ok(count)
}

fn persist(temp: NamedTempFile, path: &Path) -> Result<(), WriteError> {
    temp.as_file()
        .sync_all()
        .map_err(|source| WriteError::Persist {
            path: path.to_path_buf(),
            source,
        })?;
    temp.persist(path).map_err(|err| WriteError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldpair_core::{JobSettings, Pairs, Table};

    // Layout produced by the original hand-written emitter for the A/B/C sheet, target B.
    const ABC_TARGET_B: &str = r#"[
  {
    "name": "B_A",
    "modelSeeds": [],
    "sequences": [
      {
        "proteinChain": {
          "sequence": "SEQB",
          "count": 1,
          "useStructureTemplate": true,
          "maxTemplateDate": "2025-02-03"
        }
      },
      {
        "proteinChain": {
          "sequence": "SEQA",
          "count": 1,
          "useStructureTemplate": true,
          "maxTemplateDate": "2025-02-03"
        }
      }
    ],
    "dialect": "alphafoldserver",
    "version": 1
  },
  {
    "name": "B_C",
    "modelSeeds": [],
    "sequences": [
      {
        "proteinChain": {
          "sequence": "SEQB",
          "count": 1,
          "useStructureTemplate": true,
          "maxTemplateDate": "2025-02-03"
        }
      },
      {
        "proteinChain": {
          "sequence": "SEQC",
          "count": 1,
          "useStructureTemplate": true,
          "maxTemplateDate": "2025-02-03"
        }
      }
    ],
    "dialect": "alphafoldserver",
    "version": 1
  }
]
"#;

    fn abc_records() -> Vec<JobRecord> {
        let table = Table::from_pairs([("A", "SEQA"), ("B", "SEQB"), ("C", "SEQC")]);
        let settings = JobSettings::default();
        Pairs::new(&table, "B", "SEQB", &settings).collect()
    }

    #[test]
    fn test_exact_layout() {
        let mut buf = Vec::new();
        let count = write_jobs(&mut buf, abc_records()).unwrap();
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(buf).unwrap(), ABC_TARGET_B);
    }

    #[test]
    fn test_empty_array() {
        let mut buf = Vec::new();
        assert_eq!(write_jobs(&mut buf, Vec::new()).unwrap(), 0);
        assert_eq!(buf, b"[]\n");
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let table = Table::from_pairs([("T", "MK"), ("a\"b\\c", "G\nG")]);
        let settings = JobSettings::default();
        let mut buf = Vec::new();
        write_jobs(&mut buf, Pairs::new(&table, "T", "MK", &settings)).unwrap();

        let parsed: Vec<JobRecord> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0].name, "T_a\"b\\c");
        assert_eq!(parsed[0].sequences[1].protein_chain.sequence, "G\nG");
    }

    #[test]
    fn test_write_job_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abc_B.json");
        std::fs::write(&path, "stale").unwrap();

        assert_eq!(write_job_file(&path, abc_records()).unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ABC_TARGET_B);

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .filter(|name| name != "abc_B.json")
            .collect();
        assert!(leftovers.is_empty(), "{leftovers:?}");
    }

    #[test]
    fn test_write_job_file_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_job_file(&path, abc_records()).unwrap_err();
        assert!(matches!(err, WriteError::Create { .. }));
        assert!(!path.exists());
    }
}
