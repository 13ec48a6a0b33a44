use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::entities::record::{FieldValue, Record};
use crate::usecase::ports::source::RecordSource;

pub struct CsvFileSource {
    pub path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for CsvFileSource {
    fn load(&self) -> Result<Vec<Record>> {
        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("failed to open csv: {}", self.path.display()))?;
        let headers = reader
            .headers()
            .with_context(|| format!("failed to read headers from csv: {}", self.path.display()))?
            .clone();

        if headers.is_empty() {
            anyhow::bail!("csv header is required")
        }

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.context("failed to parse csv record")?;
            let row = headers
                .iter()
                .enumerate()
                .map(|(col_idx, name)| {
                    let value = record.get(col_idx).map(FieldValue::infer);
                    (name.to_string(), value.unwrap_or(FieldValue::Null))
                })
                .collect::<Record>();
            records.push(row);
        }

        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
