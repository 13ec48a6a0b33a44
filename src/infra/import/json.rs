use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::entities::record::Record;
use crate::usecase::ports::source::RecordSource;

const BUNDLED_DATA: &str = include_str!("../../../assets/data.json");

pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    serde_json::from_str(text).context("dataset must be a JSON array of flat objects")
}

/// The people dataset compiled into the binary.
pub struct EmbeddedSource;

impl RecordSource for EmbeddedSource {
    fn load(&self) -> Result<Vec<Record>> {
        parse_records(BUNDLED_DATA).context("failed to parse bundled dataset")
    }

    fn describe(&self) -> String {
        "bundled assets/data.json".to_string()
    }
}

pub struct JsonFileSource {
    pub path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Record>> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read json: {}", self.path.display()))?;
        parse_records(&text).with_context(|| format!("failed to parse json: {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
