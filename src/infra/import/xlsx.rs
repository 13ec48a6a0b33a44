use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::entities::record::{FieldValue, Record};
use crate::usecase::ports::source::RecordSource;

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

pub fn cell_to_value(cell: &Data) -> FieldValue {
    match cell {
        Data::Empty => FieldValue::Null,
        Data::Int(v) => FieldValue::Integer(*v),
        Data::Float(v) => FieldValue::Float(*v),
        Data::Bool(v) => FieldValue::Bool(*v),
        Data::String(v) => FieldValue::Text(v.clone()),
        other => FieldValue::Text(cell_to_string(other)),
    }
}

/// Reads the first worksheet; its first row names the fields.
pub struct XlsxFileSource {
    pub path: PathBuf,
}

impl XlsxFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for XlsxFileSource {
    fn load(&self) -> Result<Vec<Record>> {
        let mut workbook = open_workbook_auto(&self.path)
            .with_context(|| format!("failed to open xlsx: {}", self.path.display()))?;
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .with_context(|| format!("xlsx has no worksheets: {}", self.path.display()))?;
        let range = workbook
            .worksheet_range(&sheet_name)
            .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .map(|row| row.iter().map(cell_to_string).collect())
            .unwrap_or_default();
        if headers.iter().all(|header| header.trim().is_empty()) {
            anyhow::bail!("xlsx header row is required")
        }

        let records = rows
            .map(|row| {
                headers
                    .iter()
                    .enumerate()
                    .filter(|(_, name)| !name.trim().is_empty())
                    .map(|(col_idx, name)| {
                        let value = row.get(col_idx).map(cell_to_value);
                        (name.clone(), value.unwrap_or(FieldValue::Null))
                    })
                    .collect::<Record>()
            })
            .collect();

        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
